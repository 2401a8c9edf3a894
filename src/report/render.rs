//! Plain-text rendering of reports for the terminal

use std::fmt::Write;

use crate::catalog::entry::ReleaseEntry;
use crate::report::links::release_notes_deep_link;
use crate::report::types::{ReportError, VersionReport};

/// Upgrade documentation of managed PostgreSQL hosts
pub const UPGRADE_GUIDES: &[(&str, &str)] = &[
    (
        "AWS RDS Postgres",
        "https://docs.aws.amazon.com/AmazonRDS/latest/UserGuide/USER_UpgradeDBInstance.PostgreSQL.html",
    ),
    (
        "Google Cloud SQL Postgres",
        "https://cloud.google.com/sql/docs/postgres/upgrade-major-db-version-inplace",
    ),
    (
        "Heroku Postgres",
        "https://devcenter.heroku.com/articles/upgrading-heroku-postgres-databases",
    ),
    ("Neon", "https://neon.tech/docs/postgresql/postgres-upgrade"),
    (
        "Supabase",
        "https://supabase.com/docs/guides/platform/migrating-and-upgrading-projects",
    ),
    (
        "Tembo",
        "https://tembo.io/docs/getting-started/postgres_guides/how-to-upgrade-postgres-versions",
    ),
    (
        "Crunchy Data",
        "https://access.crunchydata.com/documentation/postgres-operator/latest/guides/major-postgres-version-upgrade",
    ),
    ("Xata", "https://xata.io/docs/postgres"),
];

const DATE_DISPLAY: &str = "%b %-d, %Y";

pub fn render_text(report: &VersionReport<'_>) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

pub fn render_error(error: &ReportError) -> String {
    format!("{}\n", error.user_message())
}

fn write_report(out: &mut String, report: &VersionReport<'_>) -> std::fmt::Result {
    writeln!(out, "{}", report.headline())?;
    writeln!(out)?;

    if report.is_latest {
        writeln!(out, "You are up to date!")?;
    }
    writeln!(out, "{}", report.behind_summary())?;
    writeln!(out, "{}", report.latest_summary())?;

    if let (Some(date), Some(days)) = (report.release_date, report.days_since_release) {
        writeln!(
            out,
            "PG {}.{} release date: {} ({} days ago)",
            report.version.major,
            report.version.minor,
            date.format(DATE_DISPLAY),
            days
        )?;
    }
    if let (Some(date), Some(days)) = (report.eol_date, report.days_until_eol) {
        if days < 0 {
            writeln!(
                out,
                "PG {} EOL date: {} ({} days ago)",
                report.version.major,
                date.format(DATE_DISPLAY),
                -days
            )?;
        } else {
            writeln!(
                out,
                "PG {} EOL date: {} (in {} days)",
                report.version.major,
                date.format(DATE_DISPLAY),
                days
            )?;
        }
    }

    if !report.supported_majors.is_empty() {
        writeln!(out)?;
        writeln!(out, "Supported major versions:")?;
        for line in &report.supported_majors {
            let latest = line.releases.last().map(|r| r.version.to_string());
            writeln!(
                out,
                "  Postgres {:<3} first released {}, latest {}, EOL {}",
                line.major,
                line.first_release_date.format(DATE_DISPLAY),
                latest.as_deref().unwrap_or("-"),
                line.eol_date
                    .map(|d| d.format(DATE_DISPLAY).to_string())
                    .unwrap_or_else(|| "TBD".to_string())
            )?;
        }
    }

    writeln!(out)?;
    if let Some(message) = report.no_findings() {
        writeln!(out, "{message}")?;
    } else {
        if !report.missing.security.is_empty() {
            writeln!(out, "Security: {}", report.security_summary())?;
            for issue in &report.missing.security {
                writeln!(
                    out,
                    "  [{} {:.1}] {} ({}) fixed in {}\n    {}",
                    issue.severity.as_str(),
                    issue.impact_score,
                    issue.cve.as_deref().unwrap_or("no CVE"),
                    issue.title,
                    issue.fixed_in,
                    release_notes_deep_link(&issue.fixed_in, &issue.title)
                )?;
            }
        }
        write_section(out, "Bugs", &report.bugs_summary(), &report.missing.bugs)?;
        write_section(
            out,
            "Features",
            &report.features_summary(),
            &report.missing.features,
        )?;
        write_section(
            out,
            "Performance",
            &report.performance_summary(),
            &report.missing.performance,
        )?;
    }

    writeln!(out)?;
    writeln!(out, "How to upgrade:")?;
    for (host, url) in UPGRADE_GUIDES {
        writeln!(out, "  {host}: {url}")?;
    }

    Ok(())
}

fn write_section<E: ReleaseEntry>(
    out: &mut String,
    heading: &str,
    summary: &str,
    entries: &[&E],
) -> std::fmt::Result {
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(out, "{heading}: {summary}")?;
    for entry in entries {
        writeln!(
            out,
            "  {} ({})\n    {}",
            entry.title(),
            entry.tagged_version(),
            release_notes_deep_link(entry.tagged_version(), entry.title())
        )?;
    }
    Ok(())
}
