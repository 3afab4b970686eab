use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Social sign-in providers the portal knows how to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Facebook,
    Github,
    Linkedin,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Google,
        ProviderKind::Facebook,
        ProviderKind::Github,
        ProviderKind::Linkedin,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Facebook => "facebook",
            ProviderKind::Github => "github",
            ProviderKind::Linkedin => "linkedin",
        }
    }

    /// Prefix of the `<P>_CLIENT_ID` / `<P>_CLIENT_SECRET` variables.
    pub fn env_prefix(self) -> &'static str {
        match self {
            ProviderKind::Google => "GOOGLE",
            ProviderKind::Facebook => "FACEBOOK",
            ProviderKind::Github => "GITHUB",
            ProviderKind::Linkedin => "LINKEDIN",
        }
    }

    /// Client ids shipped in sample env files. Seeing one means the
    /// provider was never really set up.
    fn placeholder_client_ids(self) -> &'static [&'static str] {
        match self {
            ProviderKind::Google => &[
                "your-google-client-id",
                "123456789-abcdefghijklmnopqrstuvwxyz123456",
            ],
            ProviderKind::Facebook => &["your-facebook-client-id"],
            ProviderKind::Github => &["your-github-client-id"],
            ProviderKind::Linkedin => &["your-linkedin-client-id"],
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown provider '{s}'"))
    }
}

#[derive(Clone)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl OAuthCredentials {
    /// Both halves set and the id is not a sample placeholder.
    pub fn is_usable_for(&self, kind: ProviderKind) -> bool {
        !self.client_id.trim().is_empty()
            && !self.client_secret.trim().is_empty()
            && !kind
                .placeholder_client_ids()
                .iter()
                .any(|p| self.client_id.contains(p))
    }
}

/// GET /api/auth/providers response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProviderAvailability {
    pub google: bool,
    pub facebook: bool,
    pub github: bool,
    pub linkedin: bool,
}

/// The providers that passed configuration checks at startup.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    configured: Vec<ProviderKind>,
}

impl ProviderRegistry {
    pub fn from_credentials(credentials: &[(ProviderKind, OAuthCredentials)]) -> Self {
        let mut configured = Vec::new();
        for (kind, creds) in credentials {
            if creds.is_usable_for(*kind) {
                if !configured.contains(kind) {
                    configured.push(*kind);
                }
            } else {
                tracing::warn!(provider = %kind, "OAuth credentials look like placeholders; provider disabled");
            }
        }
        Self { configured }
    }

    pub fn is_configured(&self, kind: ProviderKind) -> bool {
        self.configured.contains(&kind)
    }

    pub fn configured(&self) -> &[ProviderKind] {
        &self.configured
    }

    pub fn availability(&self) -> ProviderAvailability {
        ProviderAvailability {
            google: self.is_configured(ProviderKind::Google),
            facebook: self.is_configured(ProviderKind::Facebook),
            github: self.is_configured(ProviderKind::Github),
            linkedin: self.is_configured(ProviderKind::Linkedin),
        }
    }
}
