//! Fixed keyword tables for both label axes.
//!
//! `Other` and `Medium` intentionally have no keywords: they are the
//! fallbacks when nothing else matches.

use crate::domain::model::{Category, Priority};

const ACCOUNT_ACCESS: &[&str] = &[
    "login",
    "log in",
    "password",
    "locked out",
    "can't login",
    "cannot login",
    "sign in",
    "authentication",
    "2fa",
    "two-factor",
    "access denied",
    "credentials",
    "reset password",
    "password reset",
    "username",
    "account locked",
    "unauthorized",
];

const TECHNICAL_ISSUE: &[&str] = &[
    "error",
    "crash",
    "crashes",
    "crashing",
    "not working",
    "broken",
    "timeout",
    "slow",
    "failed",
    "failure",
    "exception",
    "freeze",
    "freezes",
    "unresponsive",
    "outage",
];

const BILLING_QUESTION: &[&str] = &[
    "invoice",
    "billing",
    "payment",
    "refund",
    "charge",
    "charged",
    "overcharged",
    "subscription",
    "receipt",
    "pricing",
    "credit card",
];

const FEATURE_REQUEST: &[&str] = &[
    "feature",
    "new feature",
    "feature request",
    "suggestion",
    "enhancement",
    "would like",
    "would be nice",
    "it would be nice",
    "propose",
    "improvement",
    "wish",
    "add support",
];

const BUG_REPORT: &[&str] = &[
    "bug",
    "reproduce",
    "steps to reproduce",
    "expected behavior",
    "actual behavior",
    "regression",
    "glitch",
    "defect",
    "unexpected behavior",
    "incorrect behavior",
];

const URGENT: &[&str] = &[
    "can't access",
    "critical",
    "production down",
    "system down",
    "security",
    "emergency",
    "urgent",
    "asap",
    "outage",
    "data loss",
    "immediately",
];

const HIGH: &[&str] = &[
    "important",
    "blocking",
    "blocker",
    "severe",
    "deadline",
    "high priority",
    "significant",
    "major",
];

const LOW: &[&str] = &[
    "minor",
    "cosmetic",
    "no rush",
    "when you have time",
    "low priority",
    "nice to have",
    "small issue",
    "whenever",
];

pub fn category_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::AccountAccess => ACCOUNT_ACCESS,
        Category::TechnicalIssue => TECHNICAL_ISSUE,
        Category::BillingQuestion => BILLING_QUESTION,
        Category::FeatureRequest => FEATURE_REQUEST,
        Category::BugReport => BUG_REPORT,
        Category::Other => &[],
    }
}

pub fn priority_keywords(priority: Priority) -> &'static [&'static str] {
    match priority {
        Priority::Urgent => URGENT,
        Priority::High => HIGH,
        Priority::Medium => &[],
        Priority::Low => LOW,
    }
}
