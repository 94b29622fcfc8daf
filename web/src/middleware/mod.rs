pub(crate) mod redirect_slashes;
pub(crate) mod request_logger;
