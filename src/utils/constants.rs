/// localStorage key holding the login payload plus its expiry
pub const STORAGE_KEY_AUTH: &str = "deepstation_auth";

/// Query parameter carrying the selected day
pub const DATE_QUERY_PARAM: &str = "date";

/// Wire format for calendar dates, both in the URL and towards the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field of the login payload forwarded to the day-info endpoint
pub const CREDENTIAL_FIELD: &str = "cookies";
