mod handler_test;
mod helpers;
mod http_test;
mod page_test;
