use super::*;
use crate::util::storage::MemoryStore;

fn memory_session() -> Session<MemoryStore> {
    Session::new(MemoryStore::default())
}

#[test]
fn empty_session_has_no_token() {
    let session = memory_session();
    assert_eq!(session.access_token(), None);
    assert_eq!(session.username(), None);
    assert_eq!(session.user_id(), None);
}

#[test]
fn store_login_writes_token_and_username_only() {
    let session = memory_session();
    session.store_login("tok", "alex");
    assert_eq!(session.access_token().as_deref(), Some("tok"));
    assert_eq!(session.username().as_deref(), Some("alex"));
    assert_eq!(session.user_id(), None);
    assert_eq!(session.store().len(), 2);
}

#[test]
fn store_identity_overwrites_username_and_sets_id() {
    let session = memory_session();
    session.store_login("tok", "typed-name");
    session.store_identity("alex", 12);
    assert_eq!(session.username().as_deref(), Some("alex"));
    assert_eq!(session.user_id().as_deref(), Some("12"));
    assert_eq!(session.access_token().as_deref(), Some("tok"));
}

#[test]
fn clear_removes_all_three_keys() {
    let session = memory_session();
    session.store_login("tok", "alex");
    session.store_identity("alex", 3);
    session.clear();
    assert_eq!(session.store().len(), 0);
    assert_eq!(session.access_token(), None);
}

#[test]
fn blank_token_counts_as_absent() {
    let session = memory_session();
    session.store().set(ACCESS_TOKEN_KEY, "  ");
    assert_eq!(session.access_token(), None);
}

#[test]
fn browser_session_outside_browser_is_empty() {
    let session = Session::browser();
    session.store_login("tok", "alex");
    assert_eq!(session.access_token(), None);
}
