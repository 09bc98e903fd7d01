// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knowledge-base seed articles and simulation ticket templates.
//!
//! The seed set must exist before the first pipeline run for deflection to
//! do anything useful; an empty knowledge base is valid but escalates
//! every ticket.

use chrono::Utc;

use crate::article::KnowledgeArticle;
use crate::db::Database;
use crate::error::Result;
use crate::id::generate_unique_id;
use crate::ticket::Category;

/// A knowledge article before it gets an identity.
struct SeedArticle {
    title: &'static str,
    content: &'static str,
    tags: &'static str,
    category: Category,
}

const SEED_ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        title: "Common Error Codes",
        content: "Error 500 means internal server error. Error 404 means not found. Error 403 means forbidden access.",
        tags: "error,500,404,server,http",
        category: Category::Bug,
    },
    SeedArticle {
        title: "Crash Recovery Guide",
        content: "If the application crashes, restart it using the service manager. Check logs in /var/log for details.",
        tags: "crash,recovery,restart,logs",
        category: Category::Bug,
    },
    SeedArticle {
        title: "How to Export Data",
        content: "Navigate to Settings > Export and choose CSV or JSON format. Large exports may take several minutes.",
        tags: "export,data,csv,json,settings",
        category: Category::HowTo,
    },
    SeedArticle {
        title: "Getting Started Guide",
        content: "Welcome! Create your account, verify your email, then explore the dashboard. Use the help button for tooltips.",
        tags: "onboarding,start,setup,account,dashboard",
        category: Category::HowTo,
    },
    SeedArticle {
        title: "How to Configure Notifications",
        content: "Go to Profile > Notifications to enable or disable email and in-app alerts for events.",
        tags: "notifications,email,alerts,settings,profile",
        category: Category::HowTo,
    },
    SeedArticle {
        title: "Feature Request Process",
        content: "Submit feature requests via our feedback portal. We review all requests quarterly and prioritise by vote count.",
        tags: "feature,request,feedback,roadmap",
        category: Category::FeatureRequest,
    },
    SeedArticle {
        title: "Planned Feature Roadmap",
        content: "Upcoming features include dark mode, API v2, and bulk operations. Check our public roadmap for timelines.",
        tags: "roadmap,feature,upcoming,api,dark-mode",
        category: Category::FeatureRequest,
    },
    SeedArticle {
        title: "Password Reset Guide",
        content: "Click 'Forgot Password' on the login page, enter your email, and follow the reset link sent to your inbox.",
        tags: "password,reset,login,email,account,forgot",
        category: Category::AccountIssue,
    },
    SeedArticle {
        title: "Billing FAQ",
        content: "Subscriptions renew monthly on the same date. To cancel, go to Billing > Cancel Subscription. Refunds are available within 7 days.",
        tags: "billing,subscription,cancel,refund,payment",
        category: Category::AccountIssue,
    },
    SeedArticle {
        title: "Two-Factor Authentication Setup",
        content: "Enable 2FA under Security settings. Use an authenticator app like Google Authenticator or Authy.",
        tags: "2fa,security,authentication,totp,account",
        category: Category::AccountIssue,
    },
    SeedArticle {
        title: "Service Status and Uptime",
        content: "Check our status page at status.example.com for real-time information about outages and maintenance windows.",
        tags: "status,uptime,outage,maintenance,service",
        category: Category::Other,
    },
    SeedArticle {
        title: "Contact Support",
        content: "Reach our support team via email at support@example.com or through the in-app chat widget, available 9-5 weekdays.",
        tags: "support,contact,email,chat,help",
        category: Category::Other,
    },
];

/// Install the seed knowledge base if the store has no articles yet.
///
/// Returns the number of articles inserted: the full set on first call,
/// zero on every call after that.
pub fn seed_articles(db: &Database) -> Result<usize> {
    if db.article_count()? > 0 {
        return Ok(0);
    }

    for seed in SEED_ARTICLES {
        let created_at = Utc::now();
        let id = generate_unique_id("kb", seed.title, &created_at, |candidate| {
            db.article_exists(candidate).unwrap_or(false)
        });
        let article = KnowledgeArticle::new(
            id,
            seed.title.to_string(),
            seed.content.to_string(),
            seed.tags.split(',').map(String::from).collect(),
            seed.category,
            created_at,
        );
        db.create_article(&article)?;
    }

    Ok(SEED_ARTICLES.len())
}

/// Sample `(title, description, source)` templates for batch simulation.
///
/// Most templates share vocabulary with a seed article and deflect; a few
/// miss on purpose so a batch shows both outcomes.
pub const SAMPLE_TICKETS: &[(&str, &str, &str)] = &[
    // Bug
    ("Error 500 on the server", "I keep getting an error 500 internal server error when loading the main page. The error appears on every request to the server.", "web"),
    ("Application crashes after restart", "The application crashes immediately after restart. I checked the logs in the service manager but could not find details about the crash recovery steps.", "api"),
    ("Export button gives no response", "I navigate to settings and click the export button but the CSV format download never starts. Tried JSON format export too.", "email"),
    ("Error 403 forbidden access on the server", "When I try to access the admin panel I get an error 403 forbidden. The server returns a forbidden access error on every request.", "web"),
    ("Search returns wrong results", "When I search for recent orders the results show completely unrelated documents from other users.", "api"),
    // HowTo
    ("How to reset my password", "I forgot my password and clicked the reset link on the login page but the email was never sent to my inbox.", "web"),
    ("How to export my data as CSV", "I need to navigate to settings and export all my data in CSV or JSON format for compliance.", "email"),
    ("How to enable two-factor authentication", "I want to enable 2FA under my security settings using an authenticator app like Google Authenticator or Authy.", "web"),
    ("How to configure notification alerts", "I want to go to my profile notifications and disable email alerts and in-app alerts for non-critical events.", "api"),
    ("How to invite team members", "I want to add three colleagues to my workspace but cannot find the invite option anywhere in settings.", "email"),
    // FeatureRequest
    ("Submit a feature request via feedback", "How do I submit feature requests through the feedback portal? I want my vote to count in the quarterly review process.", "web"),
    ("Dark mode and API v2 on the roadmap", "Are dark mode and API v2 upcoming features on the public roadmap? Would love timelines for bulk operations too.", "api"),
    ("Add Slack integration for alerts", "We use Slack for team communication and would love to get ticket alerts directly in our channels.", "email"),
    ("Add bulk operations to the platform", "Bulk operations for managing multiple items would save time. Is this an upcoming feature on the public roadmap with timelines?", "web"),
    ("Export metrics as PDF report", "Management needs monthly PDF summaries of resolution rates and ticket volumes for executive review.", "api"),
    // AccountIssue
    ("Forgot password and reset email not arriving", "I clicked forgot password on the login page and entered my email but the reset link was never sent to my inbox.", "email"),
    ("Cancel my subscription and get a refund", "I want to cancel my subscription and need a refund. I went to billing but the cancel subscription option is not available within the 7 days window.", "web"),
    ("Two-factor authentication code not working", "The authenticator app code is not accepted. I enabled 2FA under security settings using Google Authenticator but it keeps failing.", "api"),
    ("Account locked after failed logins", "My account was locked after multiple failed login attempts. I need to click forgot password on the login page to get a reset link sent to my email.", "email"),
    ("Billing address not updating", "Every time I save a new billing address the old one reappears and the update never persists.", "web"),
    // Other
    ("Check service status and uptime", "Where can I check the service status page for real-time information about outages and scheduled maintenance windows?", "web"),
    ("Contact the support team", "How do I reach the support team via email or through the in-app chat widget during weekdays?", "email"),
    ("Feedback on the new dashboard UI", "The new dashboard design looks good but the font size in the sidebar feels too small on 1080p monitors.", "api"),
    ("Question about data retention policy", "How long does the system keep closed ticket records before archiving or permanently deleting them?", "web"),
];

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
