pub const API_URL: &str = "https://frosty-wood-6558.getsandbox.com:443/dishes";

pub const ERROR_BANNER: &str = "An error occurred";

pub const DEFAULT_PREPARATION_TIME: &str = "00:00:00";
pub const DEFAULT_NO_OF_SLICES: &str = "1";
pub const DEFAULT_DIAMETER: &str = "0";
pub const DEFAULT_SPICINESS_SCALE: &str = "5";
pub const DEFAULT_SLICES_OF_BREAD: &str = "0";

pub const SPICINESS_MIN: u8 = 1;
pub const SPICINESS_MAX: u8 = 10;
