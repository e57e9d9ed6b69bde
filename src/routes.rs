// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const LIST: &str = "/picus/list";
pub const PUT: &str = "/picus/put";
pub const GET_ITEM: &str = "/picus/get/{key}";
