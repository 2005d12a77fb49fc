pub(crate) mod config;
pub(crate) mod platforms;
pub(crate) mod scan;
