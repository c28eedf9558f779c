use sqlx::PgPool;
use tracing::info;

use crate::error::Result;

/// Starter postings for a fresh install. Inserted once at startup when the
/// jobs table is empty; any existing row (active or not) suppresses seeding.
const SEED_JOBS: &[(&str, &str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "Sales Executive",
        "Agra",
        "10k – 14k/Months",
        "12 and Graduate pass and Others",
        "Fresher / 1 year",
        "Communication, Teamwork, confidence",
        "We are looking for a dynamic Sales Executive to join our team.",
        "Sales",
    ),
    (
        "Telecaller",
        "Agra",
        "10k - 12k/Months",
        "12 pass , BA , BBA and Others",
        "Fresher / 1 year",
        "Communication, Teamwork, Problem solving",
        "Join our customer service team as a Telecaller.",
        "Customer Service",
    ),
    (
        "Electronic Engineer",
        "Delhi NCR",
        "25k - 30k/Months",
        "Diploma , B.Tech, ITI",
        "Fresher / Experience",
        "Adaptability, Problem Solving, Critical Thinking & Creativity & Innovation and Other",
        "Seeking an Electronic Engineer for our technical team.",
        "Technology",
    ),
    (
        "Operator & Executive",
        "Noida",
        "18,000 – ₹25,000 / Month",
        "10th, 12th, Graduation and Others",
        "0 – 5 Year",
        "Production, Teamwork, Discipline and Others",
        "Looking for dedicated Operators and Executives.",
        "Operations",
    ),
    (
        "Mechanical Engineer",
        "Agra",
        "25k - 30k/Months",
        "B.Tech , Diploma , ITI",
        "Fresher / Experience",
        "Adaptability, Problem Solving, Critical Thinking & Creativity & Innovation and Others",
        "Join our engineering team as a Mechanical Engineer.",
        "Technology",
    ),
    (
        "Electrical Engineer",
        "Delhi NCR",
        "25k - 30k/Months",
        "B.Tech, diploma, ITI",
        "Fresher / Experience",
        "Adaptability, Problem Solving, Critical Thinking & Creativity & Innovation and Others",
        "Electrical Engineer position available in our growing team.",
        "Technology",
    ),
];

pub async fn seed_jobs(pool: &PgPool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (title, location, salary, qualification, experience, key_skills, description, category) in
        SEED_JOBS
    {
        sqlx::query(
            "INSERT INTO jobs (title, location, salary, qualification, experience, key_skills, \
             description, category) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(title)
        .bind(location)
        .bind(salary)
        .bind(qualification)
        .bind(experience)
        .bind(key_skills)
        .bind(description)
        .bind(category)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} initial job postings", SEED_JOBS.len());
    Ok(())
}
