use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub employee_satisfaction: u32,
    pub retention_rate: u32,
    pub training_completion: u32,
    pub performance_score: f64,
    pub total_employees: u32,
    pub active_departments: u32,
    pub pending_requests: u32,
    pub monthly_payroll: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPerformance {
    pub department: &'static str,
    pub satisfaction: u32,
    pub retention: u32,
    pub performance: f64,
    pub employee_count: u32,
    pub turnover_rate: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trends {
    pub satisfaction: Vec<TrendPoint>,
    pub retention: Vec<TrendPoint>,
    pub performance: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    NewEmployee,
    LeaveRequest,
    PerformanceReview,
    Training,
    Promotion,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: &'static str,
    pub details: &'static str,
    pub timestamp: DateTime<Utc>,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub overview: Overview,
    pub department_performance: Vec<DepartmentPerformance>,
    pub trends: Trends,
    pub recent_activity: Vec<Activity>,
}

/// Which slice of the snapshot a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Departments,
    Trends,
    Activity,
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Section::Overview),
            "departments" => Ok(Section::Departments),
            "trends" => Ok(Section::Trends),
            "activity" => Ok(Section::Activity),
            _ => Err(()),
        }
    }
}

impl AnalyticsSnapshot {
    /// Serializes one section, or the whole snapshot when `section` is `None`.
    pub fn section(&self, section: Option<Section>) -> serde_json::Result<serde_json::Value> {
        match section {
            Some(Section::Overview) => serde_json::to_value(&self.overview),
            Some(Section::Departments) => serde_json::to_value(&self.department_performance),
            Some(Section::Trends) => serde_json::to_value(&self.trends),
            Some(Section::Activity) => serde_json::to_value(&self.recent_activity),
            None => serde_json::to_value(self),
        }
    }
}

fn series(values: [f64; 6]) -> Vec<TrendPoint> {
    const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    MONTHS
        .into_iter()
        .zip(values)
        .map(|(month, value)| TrendPoint { month, value })
        .collect()
}

fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, h, m, 0)
        .single()
        .unwrap_or_default()
}

fn dept(
    department: &'static str,
    satisfaction: u32,
    retention: u32,
    performance: f64,
    employee_count: u32,
    turnover_rate: u32,
) -> DepartmentPerformance {
    DepartmentPerformance {
        department,
        satisfaction,
        retention,
        performance,
        employee_count,
        turnover_rate,
    }
}

/// The HR dashboard's fixed analytics snapshot.
pub fn demo_snapshot() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        overview: Overview {
            employee_satisfaction: 87,
            retention_rate: 94,
            training_completion: 78,
            performance_score: 4.1,
            total_employees: 524,
            active_departments: 24,
            pending_requests: 18,
            monthly_payroll: 2_400_000,
        },
        department_performance: vec![
            dept("Engineering", 92, 96, 4.3, 156, 4),
            dept("Marketing", 85, 89, 4.1, 45, 11),
            dept("Sales", 88, 91, 4.0, 78, 9),
            dept("HR", 90, 95, 4.2, 23, 5),
            dept("Finance", 83, 87, 3.9, 34, 13),
            dept("Operations", 86, 92, 4.0, 67, 8),
            dept("Design", 89, 93, 4.2, 28, 7),
            dept("Product", 91, 94, 4.3, 41, 6),
        ],
        trends: Trends {
            satisfaction: series([85.0, 86.0, 87.0, 88.0, 87.0, 89.0]),
            retention: series([92.0, 93.0, 94.0, 93.0, 94.0, 95.0]),
            performance: series([3.9, 4.0, 4.1, 4.0, 4.1, 4.2]),
        },
        recent_activity: vec![
            Activity {
                id: 1,
                kind: ActivityKind::NewEmployee,
                message: "New employee onboarded",
                details: "John Smith joined Engineering team",
                timestamp: at(12, 10, 30),
                status: "completed",
            },
            Activity {
                id: 2,
                kind: ActivityKind::LeaveRequest,
                message: "Leave request pending",
                details: "Sarah Johnson requested 5 days off",
                timestamp: at(12, 8, 15),
                status: "pending",
            },
            Activity {
                id: 3,
                kind: ActivityKind::PerformanceReview,
                message: "Performance review completed",
                details: "Michael Chen - Q4 2023 review",
                timestamp: at(11, 16, 45),
                status: "completed",
            },
            Activity {
                id: 4,
                kind: ActivityKind::Training,
                message: "Training session completed",
                details: "15 employees completed cybersecurity training",
                timestamp: at(11, 14, 20),
                status: "completed",
            },
            Activity {
                id: 5,
                kind: ActivityKind::Promotion,
                message: "Employee promoted",
                details: "Emily Rodriguez promoted to Senior UX Designer",
                timestamp: at(10, 11, 0),
                status: "completed",
            },
        ],
    }
}
