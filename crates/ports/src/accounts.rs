// crates/ports/src/accounts.rs

/// Port for the name-service lookup of owner and group ids.
///
/// `None` means the id is unknown; callers fall back to the numeric id.
pub trait AccountResolver: Send + Sync {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;

    fn user_label(&self, uid: u32) -> String {
        self.user_name(uid).unwrap_or_else(|| uid.to_string())
    }

    fn group_label(&self, gid: u32) -> String {
        self.group_name(gid).unwrap_or_else(|| gid.to_string())
    }
}
