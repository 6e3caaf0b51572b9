//! Startup seeding: the bootstrap administrator account and a fixed set
//! of sample employee records.
//!
//! Runs after migrations, before the server accepts requests. Safe to run
//! repeatedly: the admin is keyed by username, samples by email.

use chrono::NaiveDate;

use crate::config::SeedConfig;
use crate::error::AppError;
use crate::models::{NewEmployee, NewUser, UserRole};
use crate::services::Database;
use crate::utils::hash_password;

struct SampleEmployee {
    name: &'static str,
    email: &'static str,
    position: &'static str,
    department: &'static str,
    salary: f64,
    hire_date: &'static str,
    phone: &'static str,
    address: &'static str,
}

const SAMPLE_EMPLOYEES: &[SampleEmployee] = &[
    SampleEmployee {
        name: "Raj Sharma",
        email: "raj.sharma@company.com",
        position: "Software Engineer",
        department: "Engineering",
        salary: 750000.0,
        hire_date: "2023-01-15",
        phone: "+91-9876543210",
        address: "123 MG Road, Bangalore, Karnataka",
    },
    SampleEmployee {
        name: "Priya Patel",
        email: "priya.patel@company.com",
        position: "Product Manager",
        department: "Product",
        salary: 1200000.0,
        hire_date: "2022-08-20",
        phone: "+91-9876543211",
        address: "456 Koramangala, Bangalore, Karnataka",
    },
    SampleEmployee {
        name: "Amit Kumar",
        email: "amit.kumar@company.com",
        position: "HR Specialist",
        department: "Human Resources",
        salary: 600000.0,
        hire_date: "2023-03-10",
        phone: "+91-9876543212",
        address: "789 Whitefield, Bangalore, Karnataka",
    },
    SampleEmployee {
        name: "Anjali Singh",
        email: "anjali.singh@company.com",
        position: "UX Designer",
        department: "Design",
        salary: 800000.0,
        hire_date: "2023-02-28",
        phone: "+91-9876543213",
        address: "321 HSR Layout, Bangalore, Karnataka",
    },
    SampleEmployee {
        name: "Vikram Reddy",
        email: "vikram.reddy@company.com",
        position: "Data Analyst",
        department: "Analytics",
        salary: 900000.0,
        hire_date: "2022-11-15",
        phone: "+91-9876543214",
        address: "654 Jayanagar, Bangalore, Karnataka",
    },
];

/// Run all seeding steps.
pub async fn run(db: &Database, config: &SeedConfig) -> Result<(), AppError> {
    ensure_admin_user(db, config).await?;
    ensure_sample_employees(db).await?;
    Ok(())
}

/// Create the administrator account if it does not exist yet.
async fn ensure_admin_user(db: &Database, config: &SeedConfig) -> Result<(), AppError> {
    if db
        .find_user_by_username(&config.admin_username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %config.admin_username, "Admin account already present");
        return Ok(());
    }

    let password_hash = hash_password(&config.admin_password)?;
    let user_id = db
        .insert_user(&NewUser {
            username: config.admin_username.clone(),
            email: config.admin_email.clone(),
            password_hash,
            role: UserRole::Admin,
        })
        .await?;

    tracing::info!(user_id, username = %config.admin_username, "Default admin account created");
    Ok(())
}

/// Insert any sample employees that are missing, keyed by email.
async fn ensure_sample_employees(db: &Database) -> Result<(), AppError> {
    for sample in SAMPLE_EMPLOYEES {
        if db.find_employee_by_email(sample.email).await?.is_some() {
            continue;
        }

        let hire_date = sample
            .hire_date
            .parse::<NaiveDate>()
            .map_err(|e| anyhow::anyhow!("Bad sample hire date {}: {}", sample.hire_date, e))?;

        db.insert_employee(&NewEmployee {
            name: sample.name.to_string(),
            email: sample.email.to_string(),
            position: sample.position.to_string(),
            department: sample.department.to_string(),
            salary: sample.salary,
            hire_date,
            phone: Some(sample.phone.to_string()),
            address: Some(sample.address.to_string()),
        })
        .await?;

        tracing::info!(name = sample.name, "Sample employee added");
    }

    Ok(())
}
