//! Metrics registry for userdesk
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of operation counters shared by all handlers
///
/// Counters use Relaxed ordering; exact cross-counter consistency is not needed.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Users inserted through the create endpoint
    users_created: AtomicU64,
    /// Creates rejected because the name was taken
    create_conflicts: AtomicU64,
    /// Successful updates
    users_updated: AtomicU64,
    /// Successful single deletes
    users_deleted: AtomicU64,
    /// Delete-all calls
    delete_all_calls: AtomicU64,
    /// Lookups by id, hit or miss
    lookups: AtomicU64,
    /// Requests naming an id that is not stored
    lookups_missed: AtomicU64,
    /// Customer payloads received
    customers_received: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    // User metrics

    pub fn increment_users_created(&self) {
        self.users_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_create_conflicts(&self) {
        self.create_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_users_updated(&self) {
        self.users_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_users_deleted(&self) {
        self.users_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_delete_all_calls(&self) {
        self.delete_all_calls.fetch_add(1, Ordering::Relaxed);
    }

    // Lookup metrics

    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookups_missed(&self) {
        self.lookups_missed.fetch_add(1, Ordering::Relaxed);
    }

    // Customer metrics

    pub fn increment_customers_received(&self) {
        self.customers_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            users_created: self.users_created.load(Ordering::Relaxed),
            create_conflicts: self.create_conflicts.load(Ordering::Relaxed),
            users_updated: self.users_updated.load(Ordering::Relaxed),
            users_deleted: self.users_deleted.load(Ordering::Relaxed),
            delete_all_calls: self.delete_all_calls.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookups_missed: self.lookups_missed.load(Ordering::Relaxed),
            customers_received: self.customers_received.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub users_created: u64,
    pub create_conflicts: u64,
    pub users_updated: u64,
    pub users_deleted: u64,
    pub delete_all_calls: u64,
    pub lookups: u64,
    pub lookups_missed: u64,
    pub customers_received: u64,
}
