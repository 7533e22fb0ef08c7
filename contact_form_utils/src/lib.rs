mod macros;

/// Version string reported by the command line interface.
pub const fn contact_form_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
