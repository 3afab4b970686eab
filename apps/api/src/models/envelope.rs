use serde::Serialize;

/// Success envelope shared by every JSON endpoint: `{"success": true, "data": ...}`
/// plus whichever extras the endpoint reports.
#[derive(Debug, Serialize)]
pub struct Envelope<T, S = ()> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data,
            total: None,
            statistics: None,
            message: None,
        }
    }
}

impl<T, S> Envelope<T, S> {
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_statistics<S2>(self, statistics: S2) -> Envelope<T, S2> {
        Envelope {
            success: self.success,
            data: self.data,
            total: self.total,
            statistics: Some(statistics),
            message: self.message,
        }
    }
}
