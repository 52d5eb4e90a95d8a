//! End-to-end tests: factories, creators and a reducer consuming their actions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use typed_actions::prelude::*;
use typed_actions::testing::ActionRecorder;
use typed_actions::{assert_type_emitted, assert_type_not_emitted, count_type};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Todo {
    id: u32,
    title: String,
}

#[derive(Debug)]
struct TodoActions {
    add: ActionCreator<Todo>,
    remove: ActionCreator<u32>,
    clear: ActionCreator<()>,
    sync: AsyncActionCreators<(), Vec<Todo>, String>,
}

fn todo_actions(factory: &mut ActionCreatorFactory) -> Result<TodoActions, ActionError> {
    Ok(TodoActions {
        add: factory.creator_with_rule("ADD", Some(meta! { "undoable": true }), false)?,
        remove: factory.creator_with_rule("REMOVE", None, false)?,
        clear: factory.simple("CLEAR")?,
        sync: factory.async_creators("SYNC", None)?,
    })
}

fn strict_factory(prefix: &str) -> ActionCreatorFactory {
    ActionCreatorFactory::from_config(FactoryConfig::new().prefix(prefix).strict(true))
}

#[derive(Debug, Default)]
struct TodoState {
    todos: Vec<Todo>,
    syncing: bool,
    last_error: Option<String>,
}

fn reducer(state: &mut TodoState, actions: &TodoActions, action: &Action<Value>) -> bool {
    if let Some(Ok(add)) = actions.add.narrow(action) {
        state.todos.push(add.payload);
        return true;
    }
    if let Some(Ok(remove)) = actions.remove.narrow(action) {
        state.todos.retain(|t| t.id != remove.payload);
        return true;
    }
    if is_type(action, &actions.clear) {
        state.todos.clear();
        return true;
    }
    if is_type(action, &actions.sync.started) {
        state.syncing = true;
        return true;
    }
    if let Some(Ok(done)) = actions.sync.done.narrow(action) {
        state.syncing = false;
        state.todos = done.payload.result;
        return true;
    }
    if is_error(action) {
        if let Some(Ok(failed)) = actions.sync.failed.narrow(action) {
            state.syncing = false;
            state.last_error = Some(failed.payload.error);
            return true;
        }
    }
    false
}

fn todo(id: u32, title: &str) -> Todo {
    Todo {
        id,
        title: title.to_string(),
    }
}

#[test]
fn test_reducer_folds_erased_actions() {
    let mut factory = strict_factory("todos");
    let actions = todo_actions(&mut factory).unwrap();

    let queue = vec![
        actions.add.call(todo(1, "milk")).erase().unwrap(),
        actions.add.call(todo(2, "eggs")).erase().unwrap(),
        actions.remove.call(1).erase().unwrap(),
        actions.sync.started.call(()).erase().unwrap(),
    ];

    let mut state = TodoState::default();
    for action in &queue {
        assert!(reducer(&mut state, &actions, action));
    }
    assert_eq!(state.todos, vec![todo(2, "eggs")]);
    assert!(state.syncing);

    let failed = actions
        .sync
        .complete((), Err("offline".to_string()), None)
        .into_failed()
        .unwrap();
    assert!(reducer(&mut state, &actions, &failed.erase().unwrap()));
    assert!(!state.syncing);
    assert_eq!(state.last_error.as_deref(), Some("offline"));

    let done = actions
        .sync
        .complete((), Ok(vec![todo(7, "bread")]), None)
        .into_done()
        .unwrap();
    assert!(reducer(&mut state, &actions, &done.erase().unwrap()));
    assert_eq!(state.todos, vec![todo(7, "bread")]);

    assert!(reducer(&mut state, &actions, &actions.clear.call(()).erase().unwrap()));
    assert!(state.todos.is_empty());
}

#[test]
fn test_unknown_action_is_ignored() {
    let mut factory = strict_factory("todos");
    let actions = todo_actions(&mut factory).unwrap();

    let mut other_factory = strict_factory("other");
    let unrelated = other_factory.simple("ADD").unwrap();

    let mut state = TodoState::default();
    assert!(!reducer(&mut state, &actions, &unrelated.call(()).erase().unwrap()));
}

#[test]
fn test_registering_module_twice_fails() {
    let mut factory = strict_factory("todos");
    todo_actions(&mut factory).unwrap();

    let err = todo_actions(&mut factory).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate action type: todos/ADD");
}

#[test]
fn test_same_module_on_two_factories() {
    let mut first = strict_factory("todos");
    let mut second = strict_factory("todos");
    assert!(todo_actions(&mut first).is_ok());
    assert!(todo_actions(&mut second).is_ok());
}

#[test]
fn test_relaxed_factory_tolerates_duplicates() {
    let mut factory =
        ActionCreatorFactory::from_config(FactoryConfig::new().prefix("todos").strict(false));
    let first = todo_actions(&mut factory).unwrap();
    let second = todo_actions(&mut factory).unwrap();
    assert_eq!(first.add.action_type(), second.add.action_type());
}

#[test]
fn test_is_type_ignores_payload() {
    let mut factory = strict_factory("todos");
    let actions = todo_actions(&mut factory).unwrap();

    let add = actions.add.call(todo(1, "a"));
    let mut forged = add.erase().unwrap();
    forged.payload = Value::Null;

    assert!(is_type(&add, &actions.add));
    assert!(is_type(&forged, &actions.add));
    assert!(!is_type(&forged, &actions.remove));
    assert!(matches!(actions.add.narrow(&forged), Some(Err(_))));
}

#[test]
fn test_is_error_ignores_type() {
    let mut factory = strict_factory("todos");
    let actions = todo_actions(&mut factory).unwrap();

    let mut add = actions.add.call(todo(1, "a"));
    assert!(!is_error(&add));
    add.error = true;
    assert!(is_error(&add));
}

#[test]
fn test_identical_calls_give_equal_independent_actions() {
    let mut factory = strict_factory("todos");
    let actions = todo_actions(&mut factory).unwrap();

    let mut first = actions.add.call_with_meta(todo(1, "a"), meta! { "b": 2 });
    let second = actions.add.call_with_meta(todo(1, "a"), meta! { "b": 2 });
    assert_eq!(first, second);

    first.meta.insert("undoable".into(), false.into());
    assert_ne!(first, second);
    assert_eq!(actions.add.common_meta(), &meta! { "undoable": true });
}

#[test]
fn test_meta_override_on_triad() {
    let mut factory = strict_factory("todos");
    let sync = factory
        .async_creators::<u8, u8, String>("SYNC", Some(meta! { "a": 1 }))
        .unwrap();

    let failed = sync.complete(1, Err("x".into()), Some(meta! { "a": 3 }));
    assert_eq!(failed.meta(), &meta! { "a": 3 });
    assert_eq!(
        failed,
        Completed::Failed(sync.failed.call_with_meta(
            Failure {
                params: 1,
                error: "x".to_string()
            },
            meta! { "a": 3 }
        ))
    );
}

#[test]
fn test_completion_inferred_with_io_errors() {
    #[derive(Debug, ErrorLike)]
    enum Fetched {
        Body(String),
        #[error_like(error)]
        Io(String),
    }

    let mut factory = strict_factory("net");
    let get = factory.async_creators::<String, Fetched, Fetched>("GET", None).unwrap();

    let ok = get.complete_inferred(
        Completion {
            params: "/".to_string(),
            data: Fetched::Body("<html>".into()),
        },
        None,
    );
    let err = get.complete_inferred(
        Completion {
            params: "/".to_string(),
            data: Fetched::Io("reset".into()),
        },
        None,
    );

    assert_eq!(ok.action_type(), "net/GET_DONE");
    assert!(!ok.is_error());
    assert_eq!(err.action_type(), "net/GET_FAILED");
    assert!(err.is_error());
}

#[test]
fn test_recorder_with_assertions() {
    let mut factory = strict_factory("todos");
    let actions = todo_actions(&mut factory).unwrap();

    let mut recorder = ActionRecorder::new();
    recorder.record(&actions.add.call(todo(1, "a"))).unwrap();
    recorder.record(&actions.add.call(todo(2, "b"))).unwrap();
    recorder
        .record(&actions.sync.failed.call(Failure {
            params: (),
            error: "boom".to_string(),
        }))
        .unwrap();

    let errors = recorder.drain_errors();
    assert_type_emitted!(errors, actions.sync.failed);

    let rest = recorder.drain();
    assert_eq!(count_type!(rest, actions.add), 2);
    assert_type_not_emitted!(rest, actions.clear);
}

#[test]
fn test_envelope_json_shape() {
    let mut factory = strict_factory("todos");
    let actions = todo_actions(&mut factory).unwrap();

    let json = serde_json::to_value(actions.add.call(todo(1, "milk"))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "todos/ADD",
            "payload": { "id": 1, "title": "milk" },
            "meta": { "undoable": true },
            "error": false,
        })
    );
}
