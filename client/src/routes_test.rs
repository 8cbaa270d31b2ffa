use super::*;

const ALL: [AppRoute; 4] = [AppRoute::Root, AppRoute::SignIn, AppRoute::SignUp, AppRoute::Dashboard];

#[test]
fn path_is_segment_with_leading_slash() {
    for route in ALL {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn paths_match_public_surface() {
    assert_eq!(AppRoute::SignIn.path(), "/signin");
    assert_eq!(AppRoute::SignUp.path(), "/signup");
    assert_eq!(AppRoute::Dashboard.path(), "/dashboard");
    assert_eq!(AppRoute::Root.path(), "/");
}
