/// The logged-in user. Holds the account's username as a lookup key into the
/// store; the account itself stays owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    sorted: bool,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            sorted: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Flips the display order and returns the new state.
    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }
}
