pub static SITE_NAME: &str = "Tourboard";
