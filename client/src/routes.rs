//! Collection paths, relative to the versioned base URL.

pub const JOBS: &str = "/jobs";
pub const POSTCARDS: &str = "/postcards";
pub const CHECKS: &str = "/checks";
pub const BANK_ACCOUNTS: &str = "/bank_accounts";
pub const AREA_MAIL: &str = "/area_mail";
pub const ADDRESSES: &str = "/addresses";
pub const OBJECTS: &str = "/objects";
pub const SETTINGS: &str = "/settings";
pub const SERVICES: &str = "/services";
pub const COUNTRIES: &str = "/countries";
pub const STATES: &str = "/states";
pub const PACKAGINGS: &str = "/packagings";
pub const ZIP_CODE_ROUTES: &str = "/zip_code_routes";
