use super::*;

#[test]
fn greeting_names_authenticated_user() {
    let session = Session { is_authenticated: true, username: "alice".to_owned(), ..Session::default() };
    assert_eq!(greeting(&session), "Welcome, alice");
}

#[test]
fn greeting_for_anonymous_session() {
    assert_eq!(greeting(&Session::default()), "You are not signed in.");
}
