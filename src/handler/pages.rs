//! Page handlers
//!
//! Pure functions producing the HTML bodies for the registered routes.
//! No state, no I/O; the same input always yields the same bytes.

/// `GET /` body
pub fn home() -> String {
    "<h1>Homepage</h1>".to_string()
}

/// `GET /hello/{name}` body.
///
/// The name is interpolated verbatim; no HTML escaping is applied.
pub fn hello(name: &str) -> String {
    format!("<b>Hello {name}</b>!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_body() {
        assert_eq!(home(), "<h1>Homepage</h1>");
    }

    #[test]
    fn test_hello_body() {
        assert_eq!(hello("World"), "<b>Hello World</b>!");
    }

    #[test]
    fn test_hello_accepts_any_string() {
        assert_eq!(hello(""), "<b>Hello </b>!");
        assert_eq!(hello("Jo Ann"), "<b>Hello Jo Ann</b>!");
        assert_eq!(hello("René"), "<b>Hello René</b>!");
    }

    #[test]
    fn test_hello_does_not_escape_html() {
        // Verbatim interpolation is the documented behavior
        assert_eq!(
            hello("<script>alert(1)</script>"),
            "<b>Hello <script>alert(1)</script></b>!"
        );
    }

    #[test]
    fn test_handlers_are_idempotent() {
        assert_eq!(home(), home());
        assert_eq!(hello("World"), hello("World"));
    }
}
