//! End-to-end behaviour of a validation pass

use fieldcheck::prelude::*;
use fieldcheck::{assert_field_message, assert_invalid, assert_valid};

#[derive(Debug, Clone)]
struct CreatePost {
    title: String,
    body: String,
    tags: Vec<String>,
    rating: Option<f32>,
    contact: String,
    published_at: String,
}

impl CreatePost {
    fn valid() -> Self {
        CreatePost {
            title: "Hello".to_string(),
            body: "A post about validation".to_string(),
            tags: vec!["rust".to_string()],
            rating: None,
            contact: String::new(),
            published_at: "2024-06-01T08:00:00Z".to_string(),
        }
    }
}

fn validate_post<V: FieldValidator>(v: &mut V, post: &CreatePost) {
    v.required_string(&post.title, "title", None);
    v.max_char(&post.title, 80, "title", None);
    v.min_char(&post.body, 10, "body", None);
    v.required_array(&post.tags, "tags", None);
    v.range_opt(post.rating, 0.0, 5.0, "rating", None);
    v.email(&post.contact, "contact", None);
    v.iso8601_datetime(&post.published_at, "published_at", None);
}

#[test]
fn test_valid_input_records_nothing() {
    let mut v = Validator::new();
    validate_post(&mut v, &CreatePost::valid());

    assert_valid!(v);
    assert!(v.messages().is_empty());
    assert_eq!(v.get_error(), None);
}

#[test]
fn test_every_failure_is_reported() {
    let post = CreatePost {
        title: "   ".to_string(),
        body: "short".to_string(),
        tags: vec![],
        rating: Some(7.5),
        contact: "a@b".to_string(),
        published_at: "yesterday".to_string(),
    };

    let mut v = Validator::new();
    validate_post(&mut v, &post);

    assert_invalid!(v);
    assert_eq!(v.len(), 6);
    assert_field_message!(v, "title", "title is required");
    assert_field_message!(v, "body", "body must be at least 10 characters");
    assert_field_message!(v, "tags", "tags is required");
    assert_field_message!(v, "rating", "rating must be between 0 and 5");
    assert_field_message!(v, "contact", "contact must be a valid email address");
    assert_field_message!(v, "published_at", "published_at must be an ISO8601 datetime");
    assert_eq!(v.get_error(), Some(ValidationError::new("title is required")));
}

#[test]
fn test_boundary_scenarios() {
    let mut v = Validator::new();
    v.min(5, 5, "age", None);
    assert!(v.has_error());

    let mut v = Validator::new();
    v.max(5, 5, "age", None);
    assert!(!v.has_error());

    let mut v = Validator::new();
    v.required_string("   ", "title", None);
    assert!(v.has_error());

    let mut v = Validator::new();
    v.email("", "contact", None);
    assert!(!v.has_error());

    let mut v = Validator::new();
    v.email("a@b", "contact", None);
    assert!(v.has_error());

    let mut v = Validator::new();
    v.in_string("red", &["red", "blue"], "color", None);
    assert!(!v.has_error());

    let mut v = Validator::new();
    v.in_string("green", &["red", "blue"], "color", None);
    assert!(v.has_error());
}

#[test]
fn test_single_failure_with_override() {
    let mut v = Validator::new();
    v.min(3, 18, "age", Some(ValidationError::new("come back when you are 18")));

    assert!(v.has_error());
    let messages = v.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages["age"], "come back when you are 18");
}

#[test]
fn test_messages_and_get_error_diverge_on_repeated_field() {
    let mut v = Validator::new();
    v.required_string("", "x", None);
    v.min_char("", 3, "x", None);

    assert_eq!(v.messages()["x"], "x must be at least 3 characters");
    assert_eq!(v.get_error(), Some(ValidationError::new("x is required")));
}

#[test]
fn test_structured_first_error_is_bad_request() {
    let mut v = Validator::structured();
    v.gender("unknown", "gender", None);
    v.required_number(0_i64, "count", None);

    let err = v.get_error().expect("a failure was recorded");
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message(), "gender must be either male or female");
}

#[test]
fn test_custom_factory() {
    #[derive(Debug, Default)]
    struct Coded;

    impl ErrorFactory for Coded {
        type Error = String;

        fn build(&self, args: std::fmt::Arguments<'_>) -> String {
            format!("E_VALIDATION: {}", args)
        }
    }

    let mut v: Validator<Coded> = Validator::default();
    v.required_bool(false, "terms", None);
    v.required_bool(false, "privacy", Some("privacy must be accepted".to_string()));

    assert_eq!(v.messages()["terms"], "E_VALIDATION: terms is required");
    assert_eq!(v.messages()["privacy"], "privacy must be accepted");
}

#[test]
fn test_into_result_for_early_return() {
    fn handler(title: &str) -> Result<&'static str, FieldErrors<ApiError>> {
        let mut v = Validator::structured();
        v.required_string(title, "title", None);
        v.into_result()?;
        Ok("created")
    }

    assert_eq!(handler("Hello").unwrap(), "created");

    let errors = handler("").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().name(), "title");
    assert_eq!(errors.first().error().status_code(), 400);
    assert_eq!(errors.to_string(), "validation failed\n  -> title: title is required");
}

#[test]
fn test_escape_hatches() {
    let mut v = Validator::new();
    v.add_error("", ValidationError::new("request body is empty"));
    fieldcheck::add_error!(v, "slug", "slug {:?} is taken", "hello-world");

    assert_eq!(v.len(), 2);
    assert_eq!(v.messages().len(), 1);
    assert_eq!(v.messages()["slug"], "slug \"hello-world\" is taken");
    assert_eq!(v.get_error(), Some(ValidationError::new("request body is empty")));
}

#[test]
fn test_mock_validator_in_consumer_test() {
    use fieldcheck::testing::MockValidator;

    let mut mock = MockValidator::<ValidationError>::new()
        .returning_has_error(true)
        .returning_messages([("title", "stubbed")]);

    let post = CreatePost::valid();
    validate_post(&mut mock, &post);

    assert!(mock.has_error());
    assert_eq!(mock.messages()["title"], "stubbed");
    assert_eq!(mock.calls().len(), 7);
    mock.assert_called_with("required_string", &[&"Hello"], "title");
    mock.assert_called_with("max_char", &[&"Hello", &80_usize], "title");
    mock.assert_called_with("required_array", &[&1_usize], "tags");
    mock.assert_called_with("range_opt", &[&None::<f32>, &0.0_f32, &5.0_f32], "rating");
    mock.assert_not_called("gender");
}
