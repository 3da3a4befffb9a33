pub mod logo_resolver;
