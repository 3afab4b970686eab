// Demo dataset loaded at startup.

use chrono::NaiveDate;

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::job::{Job, JobStatus, JobType};
use crate::models::review::{Review, ReviewStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: u64,
    title: &str,
    department: &str,
    location: &str,
    salary: &str,
    description: &str,
    requirements: &str,
    applicants: u32,
    posted: NaiveDate,
) -> Job {
    Job {
        id,
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        job_type: JobType::FullTime,
        salary: salary.to_string(),
        description: description.to_string(),
        requirements: requirements.to_string(),
        applicants,
        status: JobStatus::Active,
        created_at: posted,
        updated_at: posted,
    }
}

pub fn jobs() -> Vec<Job> {
    vec![
        job(
            1,
            "Senior Frontend Developer",
            "Engineering",
            "San Francisco, CA",
            "$120,000 - $160,000",
            "We are looking for a senior frontend developer to join our engineering team.",
            "5+ years of React experience, TypeScript, CSS/SCSS",
            24,
            date(2024, 1, 15),
        ),
        job(
            2,
            "Marketing Manager",
            "Marketing",
            "New York, NY",
            "$80,000 - $100,000",
            "Lead our marketing initiatives and drive brand awareness.",
            "3+ years marketing experience, digital marketing skills",
            18,
            date(2024, 1, 10),
        ),
        job(
            3,
            "Sales Representative",
            "Sales",
            "Chicago, IL",
            "$60,000 - $80,000 + commission",
            "Drive sales growth and build relationships with clients.",
            "2+ years sales experience, excellent communication",
            32,
            date(2024, 1, 8),
        ),
        job(
            4,
            "HR Specialist",
            "Human Resources",
            "Remote",
            "$70,000 - $90,000",
            "Support HR operations and employee relations.",
            "HR degree or equivalent experience, strong interpersonal skills",
            15,
            date(2024, 1, 5),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: u64,
    name: &str,
    position: &str,
    experience: &str,
    status: CandidateStatus,
    applied: NaiveDate,
    skills: &[&str],
    location: &str,
    job_id: u64,
) -> Candidate {
    let slug = name.to_lowercase().replace(' ', ".");
    Candidate {
        id,
        name: name.to_string(),
        position: position.to_string(),
        experience: experience.to_string(),
        status,
        applied_date: applied,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        email: format!("{slug}@email.com"),
        phone: Some(format!("+1-555-{:04}", 122 + id)),
        location: Some(location.to_string()),
        resume: Some(format!("{}_resume.pdf", slug.replace('.', "_"))),
        job_id: Some(job_id),
    }
}

pub fn candidates() -> Vec<Candidate> {
    vec![
        candidate(
            1,
            "Alex Thompson",
            "Offshore Engineer",
            "5 years",
            CandidateStatus::Shortlisted,
            date(2024, 1, 10),
            &["Drilling", "Safety", "Maintenance"],
            "Houston, TX",
            1,
        ),
        candidate(
            2,
            "Maria Rodriguez",
            "Marine Technician",
            "3 years",
            CandidateStatus::New,
            date(2024, 1, 11),
            &["Navigation", "Equipment", "Safety"],
            "Miami, FL",
            2,
        ),
        candidate(
            3,
            "James Wilson",
            "Rig Supervisor",
            "8 years",
            CandidateStatus::Interviewed,
            date(2024, 1, 9),
            &["Leadership", "Operations", "Safety"],
            "New Orleans, LA",
            3,
        ),
        candidate(
            4,
            "Sarah Chen",
            "Environmental Specialist",
            "4 years",
            CandidateStatus::Shortlisted,
            date(2024, 1, 8),
            &["Compliance", "Monitoring", "Reporting"],
            "San Francisco, CA",
            4,
        ),
        candidate(
            5,
            "David Kumar",
            "Mechanical Engineer",
            "6 years",
            CandidateStatus::New,
            date(2024, 1, 7),
            &["Maintenance", "Troubleshooting", "Safety"],
            "Dallas, TX",
            1,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: u64,
    name: &str,
    position: &str,
    department: &str,
    rating: u8,
    text: &str,
    posted: NaiveDate,
    status: ReviewStatus,
) -> Review {
    Review {
        id,
        employee_id: 100 + id,
        name: name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        rating,
        review: text.to_string(),
        date: posted,
        status,
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review(
            1,
            "Sarah Johnson",
            "Software Engineer",
            "Engineering",
            5,
            "Great company culture and excellent work-life balance.",
            date(2024, 1, 10),
            ReviewStatus::Published,
        ),
        review(
            2,
            "Michael Chen",
            "Product Manager",
            "Product",
            4,
            "Good opportunities for growth. Management is responsive to feedback.",
            date(2024, 1, 8),
            ReviewStatus::Published,
        ),
        review(
            3,
            "Emily Rodriguez",
            "UX Designer",
            "Design",
            5,
            "Amazing team collaboration and creative freedom.",
            date(2024, 1, 5),
            ReviewStatus::Published,
        ),
        review(
            4,
            "David Kim",
            "Data Analyst",
            "Analytics",
            3,
            "Interesting projects but the workload can be overwhelming.",
            date(2024, 1, 3),
            ReviewStatus::Published,
        ),
        review(
            5,
            "Lisa Wang",
            "Marketing Specialist",
            "Marketing",
            4,
            "Creative environment with lots of autonomy.",
            date(2024, 1, 1),
            ReviewStatus::Pending,
        ),
        review(
            6,
            "James Wilson",
            "Sales Manager",
            "Sales",
            4,
            "Competitive environment with clear goals.",
            date(2023, 12, 28),
            ReviewStatus::Pending,
        ),
    ]
}
