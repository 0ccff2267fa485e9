use crate::infra::{in_memory_services, Services};
use campus_placement::config::PlacementConfig;
use campus_placement::error::AppError;
use campus_placement::workflows::placement::assessment::QuestionId;
use campus_placement::workflows::placement::{
    ApplicationRecord, JobPosting, ProfileSubmission, RatingSubmission, SubmittedAnswers,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// CSV file (title,company,description,skills) to seed jobs from instead of the built-in set.
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
}

const DEMO_STUDENTS: [(&str, &str); 3] = [
    ("Alice (Demo User)", "Python, Pytorch"),
    ("Bob (Demo User)", "Java, Spring"),
    ("Carol (Demo User)", ""),
];

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let services = in_memory_services(&PlacementConfig::default())?;

    println!("Campus placement demo");
    let jobs = match &args.jobs_csv {
        Some(path) => {
            println!("Job source: {}", path.display());
            services.jobs.import_path(path)?
        }
        None => {
            println!("Job source: built-in sample postings");
            demo_postings()
                .into_iter()
                .map(|posting| services.jobs.post(posting))
                .collect::<Result<Vec<_>, _>>()?
        }
    };
    for job in &jobs {
        println!(
            "- {} {} @ {} [{}]",
            job.id, job.title, job.company_name, job.required_skills
        );
    }

    println!("\nApplying without a profile");
    if let Some(job) = jobs.first() {
        match services.applications.apply(job.id, "Dana (Demo User)") {
            Ok(record) => println!("  Unexpectedly accepted {}", record.id),
            Err(err) => println!("  Refused: {}", err),
        }
    }

    println!("\nStudent profiles");
    for (name, skills) in DEMO_STUDENTS {
        let (student, change) = services.profiles.save(ProfileSubmission {
            name: name.to_string(),
            skills: Some(skills.to_string()),
            github_url: Some(format!("https://github.com/{}", slug(name))),
            projects: Some("Campus placement portal".to_string()),
            credential_locker_id: None,
        })?;
        let skills = if student.skills.is_empty() {
            "none declared".to_string()
        } else {
            student.skills.to_string()
        };
        println!("- {} ({:?}): {}", student.name, change, skills);
    }

    println!("\nApplications");
    for (name, _) in DEMO_STUDENTS {
        for job in &jobs {
            let record = services.applications.apply(job.id, name)?;
            render_application(&record, &job.title);
        }
    }

    println!("\nRecruiter decisions");
    let pending: Vec<ApplicationRecord> = services
        .applications
        .all()?
        .into_iter()
        .filter(|record| !record.status.is_decided())
        .collect();
    for (index, record) in pending.iter().enumerate() {
        let decided = if index % 2 == 0 {
            services.applications.accept(record.id)?
        } else {
            services
                .applications
                .reject(record.id, "The role was filled by an internal candidate.")?
        };
        println!(
            "- {} for {} -> {}: {}",
            decided.id,
            decided.student_name,
            decided.status.label(),
            decided.feedback.as_deref().unwrap_or_default()
        );
    }

    println!("\nRecommendations");
    for (name, skills) in DEMO_STUDENTS {
        let recommended = services.jobs.recommendations(skills)?;
        let ids: Vec<String> = recommended.iter().map(ToString::to_string).collect();
        if ids.is_empty() {
            println!("- {}: none", name);
        } else {
            println!("- {}: {}", name, ids.join(", "));
        }
    }

    println!("\nSoft-skills assessment");
    run_assessment(&services)?;

    println!("\nCompany ratings");
    if let Some(job) = jobs.first() {
        for (name, stars, feedback) in [
            ("Alice (Demo User)", 5, "Clear interview process"),
            ("Bob (Demo User)", 3, "Slow to respond"),
        ] {
            services.ratings.rate(RatingSubmission {
                student_name: name.to_string(),
                company_name: job.company_name.clone(),
                job_id: job.id,
                rating: stars,
                feedback: feedback.to_string(),
            })?;
        }
    }
    for (company, stats) in services.ratings.company_stats()? {
        println!(
            "- {}: {:.1} average over {} ratings",
            company, stats.average, stats.count
        );
    }

    Ok(())
}

fn run_assessment(services: &Services) -> Result<(), AppError> {
    let questions = services.assessment.questions()?;
    for question in &questions {
        println!("  {} {}", question.id, question.prompt);
    }

    let answers: SubmittedAnswers = ["B", "b", "B", "A", "C"]
        .iter()
        .enumerate()
        .map(|(index, letter)| (QuestionId(index as u32 + 1), letter.to_string()))
        .collect();
    let attempt = services.assessment.submit("Alice (Demo User)", &answers)?;
    println!(
        "- {} scored {} ({} responses recorded)",
        attempt.student_name,
        attempt.score.summary(),
        attempt.responses_recorded
    );
    Ok(())
}

fn render_application(record: &ApplicationRecord, job_title: &str) {
    let outcome = if record.auto_rejected {
        "auto-rejected"
    } else {
        record.status.label()
    };
    println!(
        "- {} applied to {} -> {}",
        record.student_name, job_title, outcome
    );
    if let Some(feedback) = &record.feedback {
        println!("  Feedback: {}", feedback);
    }
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

fn demo_postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            title: "Machine Learning Intern".to_string(),
            company_name: "DeepMind".to_string(),
            description: "Work on LLMs.".to_string(),
            skills: "Python, Pytorch, AI".to_string(),
        },
        JobPosting {
            title: "Web Developer".to_string(),
            company_name: "Google".to_string(),
            description: "Build React dashboards.".to_string(),
            skills: "React, JavaScript, CSS".to_string(),
        },
        JobPosting {
            title: "Data Analyst".to_string(),
            company_name: "Goldman Sachs".to_string(),
            description: "Analyze financial trends.".to_string(),
            skills: "SQL, Excel, Python".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_with_builtin_postings() {
        run_demo(DemoArgs::default()).expect("demo completes");
    }

    #[test]
    fn demo_reports_missing_csv() {
        let args = DemoArgs {
            jobs_csv: Some(PathBuf::from("/nonexistent/jobs.csv")),
        };

        match run_demo(args) {
            Err(AppError::Import(_)) => {}
            other => panic!("expected import error, got {other:?}"),
        }
    }

    #[test]
    fn slug_uses_first_name() {
        assert_eq!(slug("Alice (Demo User)"), "alice");
    }
}
