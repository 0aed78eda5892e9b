mod certificate_request_test;
mod execution_test;
mod load_options_test;
mod test_utils;
