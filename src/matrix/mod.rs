//! Matrix protocol types shared by the homeserver client and the web layer

mod errcode;

pub use errcode::{ErrorCode, MatrixErrorInfo};

/// Client-server user directory endpoint, legacy `r0` prefix
pub const USER_DIRECTORY_SEARCH_PATH_R0: &str = "/_matrix/client/r0/user_directory/search";

/// Client-server user directory endpoint, `v3` prefix
pub const USER_DIRECTORY_SEARCH_PATH_V3: &str = "/_matrix/client/v3/user_directory/search";
