// Response messages
pub const USER_CREATED_MESSAGE: &str = "User created successfully";
pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";
pub const NO_MATCHES_MESSAGE: &str = "No matching users found";

pub const SEARCH_MESSAGE_HEADER: &str = "x-search-message";
