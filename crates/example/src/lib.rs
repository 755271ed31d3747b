//! Example signup flow built with interactor.
//!
//! [`Signup`] registers an account in a [`Directory`]. Before validation it
//! normalizes its input; during its computation it composes a nested
//! [`QuotaCheck`] and propagates the check's failure with `?`.
//!
//! # Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Signup                                                     │
//! │                                                             │
//! │  ┌───────────┐   ┌──────────┐   ┌────────────────────────┐  │
//! │  │ normalize │──▶│ validate │──▶│ run                    │  │
//! │  └───────────┘   └──────────┘   │  compose(QuotaCheck)?  │  │
//! │                                 │  register account      │  │
//! │                                 └───────────┬────────────┘  │
//! │                                             ▼               │
//! │                                       ┌──────────┐          │
//! │                                       │ announce │          │
//! │                                       └──────────┘          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use interactor::prelude::*;

/// Plans a signup may choose, separated by spaces.
pub const PLANS: &str = "free pro team";

/// Maximum number of accounts per plan.
#[must_use]
pub fn seat_limit(plan: &str) -> usize {
    match plan {
        "team" => 3,
        "pro" => 10,
        _ => 100,
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Lowercased email address.
    pub email: String,
    /// One of [`PLANS`].
    pub plan: String,
}

/// In-memory account store.
#[derive(Debug, Default)]
pub struct Directory {
    accounts: Vec<Account>,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered accounts, oldest first.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Returns the number of accounts on `plan`.
    #[must_use]
    pub fn seats_taken(&self, plan: &str) -> usize {
        self.accounts
            .iter()
            .filter(|account| account.plan == plan)
            .count()
    }

    /// Returns `true` if an account already uses `email`.
    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|account| account.email == email)
    }

    fn insert(&mut self, name: String, email: String, plan: String) -> Account {
        let account = Account {
            id: self.accounts.len() as u64 + 1,
            name,
            email,
            plan,
        };
        self.accounts.push(account.clone());
        account
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QuotaCheck
// ─────────────────────────────────────────────────────────────────────────────

/// Computes the seats left on a plan, failing when none are.
#[derive(Debug, Lifecycle, Validate)]
pub struct QuotaCheck<'a> {
    /// Directory to count seats in.
    pub directory: &'a Directory,
    /// Plan to check.
    #[validate(required, oneof = "free pro team")]
    pub plan: String,
}

impl Interaction for QuotaCheck<'_> {
    type Output = usize;

    fn run(&mut self) -> InteractionResult<usize> {
        let limit = seat_limit(&self.plan);
        let taken = self.directory.seats_taken(&self.plan);

        match limit.checked_sub(taken) {
            Some(left) if left > 0 => Ok(left),
            _ => Err(InteractionError::execution(format!(
                "plan '{}' has no seats left ({taken}/{limit})",
                self.plan
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Signup
// ─────────────────────────────────────────────────────────────────────────────

/// Registers a new account.
#[derive(Debug, Lifecycle, Validate)]
pub struct Signup<'a> {
    /// Directory the account is added to.
    pub directory: &'a mut Directory,
    /// Display name; trimmed before validation.
    #[validate(required, min = 2, max = 40)]
    pub name: String,
    /// Email address; trimmed and lowercased before validation.
    #[validate(required, min = 3, max = 254)]
    pub email: String,
    /// Requested plan; defaults to `free` when left blank.
    #[validate(oneof = "free pro team")]
    pub plan: String,
    /// Seats left on the plan after this signup, set by the computation.
    pub seats_left: Option<usize>,
    /// Runs `normalize` before validation.
    #[hooks(before = "normalize")]
    pub validate_hooks: ValidateHooks,
    /// Runs `announce` once the account is registered.
    #[hooks(after = "announce")]
    pub execute_hooks: ExecuteHooks,
}

impl<'a> Signup<'a> {
    /// Creates a signup for `directory`.
    pub fn new(
        directory: &'a mut Directory,
        name: impl Into<String>,
        email: impl Into<String>,
        plan: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            name: name.into(),
            email: email.into(),
            plan: plan.into(),
            seats_left: None,
            validate_hooks: ValidateHooks,
            execute_hooks: ExecuteHooks,
        }
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.plan = self.plan.trim().to_lowercase();
        if self.plan.is_empty() {
            self.plan.push_str("free");
        }
    }

    fn announce(&mut self) {
        tracing::info!(
            email = %self.email,
            plan = %self.plan,
            seats_left = ?self.seats_left,
            "account registered"
        );
    }
}

impl Interaction for Signup<'_> {
    type Output = Account;

    fn run(&mut self) -> InteractionResult<Account> {
        if !self.email.contains('@') {
            return Err(InteractionError::execution(format!(
                "'{}' is not an email address",
                self.email
            )));
        }
        if self.directory.contains_email(&self.email) {
            return Err(InteractionError::execution(format!(
                "'{}' is already registered",
                self.email
            )));
        }

        let left = compose(&mut QuotaCheck {
            directory: self.directory,
            plan: self.plan.clone(),
        })?;
        self.seats_left = Some(left - 1);

        Ok(self
            .directory
            .insert(self.name.clone(), self.email.clone(), self.plan.clone()))
    }
}
