//! Portal pages for testing the login and key-request steps.

/// Key-request page carrying the export form with `action`.
pub fn key_page(action: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Green Button Download</title></head>
<body>
    <form name="greenButtonDownload" action="/app/capricorn" method="post">
        <input type="hidden" name="para" value="greenButtonDownload">
    </form>
    <form name="downloadXml" id="downloadXml" action="{}" method="post">
        <input type="submit" value="Download">
    </form>
</body>
</html>"#,
        action
    )
}

/// Key-request page as rendered when the session is no longer valid.
pub fn key_page_without_form() -> String {
    r#"<!DOCTYPE html>
<html>
<body>
    <form name="loginForm" action="/app/capricorn?para=index" method="post">
        <input type="text" name="accessEmail">
    </form>
</body>
</html>"#
        .to_string()
}

/// Login page the portal serves (with status 200) for bad credentials.
pub fn login_failure_page() -> String {
    r#"<html><body>
    <div class="error">We encountered a problem with your sign in. Please try again.</div>
</body></html>"#
        .to_string()
}

/// Landing page after a successful login.
pub fn login_success_page() -> String {
    r#"<html><body><h1>My Account</h1></body></html>"#.to_string()
}
