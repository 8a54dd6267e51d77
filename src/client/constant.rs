pub const SITE_NAME: &str = "Dog Dashboard";
