//! Catalog command - list accepted field values

use crate::cli::style::Stylize;
use anstream::println;
use clarity360::draft::{MAX_ATTACHMENTS, MAX_ATTACHMENT_BYTES, accepted_extensions};
use clarity360::types::{ConcernType, Department, StatusChoice};

/// Print concern types, departments, statuses and attachment limits
pub fn run_catalog() {
    println!("{}", "Concern types".emphasis());
    for concern in ConcernType::ALL {
        println!("  {} {}", format!("{:<16}", concern.slug()).accent(), concern.label());
    }
    println!();

    println!("{}", "Departments".emphasis());
    for department in Department::ALL {
        println!(
            "  {} {}",
            format!("{:<16}", department.slug()).accent(),
            department.label()
        );
    }
    println!();

    println!("{}", "Statuses".emphasis());
    for status in StatusChoice::ALL {
        println!("  {}", status.wire_value().accent());
    }
    println!();

    println!("{}", "Attachments".emphasis());
    println!(
        "  up to {} files, {} MB each: {}",
        MAX_ATTACHMENTS,
        MAX_ATTACHMENT_BYTES / (1024 * 1024),
        accepted_extensions().muted()
    );
}
