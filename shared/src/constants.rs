pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
pub const RESET_PASSWORD_ENDPOINT: &str = "/user/reset-password/reset-password";
pub const SIGN_IN_ROUTE: &str = "/signin";

pub const OTP_REQUIRED_ERROR: &str = "OTP is required";
pub const INVALID_OTP_ERROR: &str = "OTP must be exactly 6 digits";
pub const PASSWORD_REQUIRED_ERROR: &str = "Password is required";
pub const PASSWORD_TOO_SHORT_ERROR: &str = "Password must be at least 8 characters";
pub const INVALID_PASSWORD_ERROR: &str = "Password must include at least one uppercase letter, one lowercase letter, one number, and one special character";
pub const EMAIL_REQUIRED_ERROR: &str = "Email address is required";
pub const INVALID_EMAIL_ERROR: &str = "Invalid email address";

pub const REQUEST_FAILED_ERROR: &str = "Failed to send the request.";
pub const NETWORK_ERROR: &str = "Network error. Please try again later.";

pub const OTP_LENGTH: usize = 6;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";
