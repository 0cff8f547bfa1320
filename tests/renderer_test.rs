use apigen::error::Error;
use apigen::renderer::{MiniJinjaRenderer, RenderContext, TemplateRenderer};
use apigen::schema::{parse_api_definition, ApiDefinition};

fn api() -> ApiDefinition {
    parse_api_definition(
        r#"{"auth": [
            {"Path": "/login", "Method": "POST", "Request": {"email": "string"}, "Response": {}},
            {"Path": "/", "Method": "GET", "FuncName": "root", "Request": {}, "Response": {}}
        ]}"#,
        "api.json",
    )
    .unwrap()
}

fn services() -> Vec<String> {
    vec!["auth".to_string(), "payments".to_string()]
}

fn render(source: &str) -> Result<String, Error> {
    let mut renderer = MiniJinjaRenderer::new();
    renderer.add_template("test.j2", source)?;
    let api = api();
    let services = services();
    renderer.render("test.j2", &RenderContext::new(&services, &api))
}

#[test]
fn test_context_fields() {
    let rendered = render("{{ Services|join(',') }} {{ ApiDef.auth|length }}").unwrap();
    assert_eq!(rendered, "auth,payments 2");
}

#[test]
fn test_func_name_function() {
    let rendered =
        render("{% for e in ApiDef.auth %}{{ func_name(e) }};{% endfor %}").unwrap();
    assert_eq!(rendered, "POSTLogin;GET;");
}

#[test]
fn test_func_name_override_is_visible() {
    let rendered = render(
        "{% for e in ApiDef.auth %}{{ e.FuncName or func_name(e) }};{% endfor %}",
    )
    .unwrap();
    assert_eq!(rendered, "POSTLogin;root;");
}

#[test]
fn test_string_helpers() {
    assert_eq!(render("{{ sub(3, 1) }}").unwrap(), "2");
    assert_eq!(render("{{ substr('/auth/login', 1, 5) }}").unwrap(), "auth");
    assert_eq!(render("{{ tolower('POST') }}").unwrap(), "post");
    assert_eq!(render("{{ strtitle('hello world') }}").unwrap(), "Hello World");
}

#[test]
fn test_sub_with_length() {
    let rendered = render(
        "{% for s in Services %}{{ s }}{% if loop.index0 < sub(Services|length, 1) %}, {% endif %}{% endfor %}",
    )
    .unwrap();
    assert_eq!(rendered, "auth, payments");
}

#[test]
fn test_substr_out_of_range_is_execution_error() {
    match render("{{ substr('abc', 0, 4) }}") {
        Err(Error::ExecutionError { template, source }) => {
            assert_eq!(template, "test.j2");
            assert!(source.to_string().contains("slice bounds out of range"));
        }
        other => panic!("Expected ExecutionError, got {:?}", other),
    }
}

#[test]
fn test_unknown_function_is_template_error() {
    assert!(matches!(
        render("{{ no_such_helper(1) }}"),
        Err(Error::TemplateError { .. })
    ));
}

#[test]
fn test_unknown_field_is_template_error() {
    assert!(matches!(render("{{ ApiDef.auth[0].Nope }}"), Err(Error::TemplateError { .. })));
    assert!(matches!(render("{{ Missing }}"), Err(Error::TemplateError { .. })));
}

#[test]
fn test_syntax_error_names_template() {
    let mut renderer = MiniJinjaRenderer::new();
    match renderer.add_template("broken.j2", "{% for x in %}") {
        Err(Error::TemplateError { template, .. }) => assert_eq!(template, "broken.j2"),
        other => panic!("Expected TemplateError, got {:?}", other),
    }
}

#[test]
fn test_unknown_template() {
    let renderer = MiniJinjaRenderer::new();
    let api = api();
    let result = renderer.render("missing.j2", &RenderContext::new(&[], &api));
    assert!(matches!(result, Err(Error::TemplateError { .. })));
}

#[test]
fn test_render_to_write_matches_render() {
    let mut renderer = MiniJinjaRenderer::new();
    renderer
        .add_template("stream.j2", "{% for e in ApiDef.auth %}{{ e.Method }} {{ e.Path }}\n{% endfor %}")
        .unwrap();
    let api = api();
    let services = services();
    let context = RenderContext::new(&services, &api);

    let mut streamed = Vec::new();
    renderer.render_to_write("stream.j2", &context, &mut streamed).unwrap();

    assert_eq!(String::from_utf8(streamed).unwrap(), renderer.render("stream.j2", &context).unwrap());
}

#[test]
fn test_bytelen_agrees_with_substr() {
    assert_eq!(render("{{ bytelen('/café') }}").unwrap(), "6");
    assert_eq!(render("{% set p = '/café' %}{{ substr(p, 1, bytelen(p)) }}").unwrap(), "café");
}

#[test]
fn test_rust_ident_filter() {
    assert_eq!(render("{{ 'type'|rust_ident }}").unwrap(), "r#type");
    assert_eq!(render("{{ 'email'|rust_ident }}").unwrap(), "email");
}
