use app_cli::error::Error;
use app_cli::renderer::{MiniJinjaRenderer, ProjectVariables, TemplateRenderer};

fn variables(author: Option<&str>) -> ProjectVariables {
    ProjectVariables {
        project_name: "My App".to_string(),
        version: "1.2.3".to_string(),
        author: author.map(str::to_string),
    }
}

#[test]
fn test_context_uses_camel_case() {
    let context = variables(None).to_context().unwrap();
    assert_eq!(
        context,
        serde_json::json!({"projectName": "My App", "version": "1.2.3", "author": null})
    );
}

#[test]
fn test_minijinja_renderer() {
    let engine = MiniJinjaRenderer::new();
    let context = variables(Some("Jane")).to_context().unwrap();

    let result = engine
        .render("package.json", "{\"name\": \"{{ projectName }}\", \"version\": \"{{ version }}\"}\n", &context)
        .unwrap();
    assert_eq!(result, "{\"name\": \"My App\", \"version\": \"1.2.3\"}\n");

    let result = engine
        .render("README.md", "{% if author %}by {{ author }}{% endif %}", &context)
        .unwrap();
    assert_eq!(result, "by Jane");
}

#[test]
fn test_render_error() {
    let engine = MiniJinjaRenderer::default();
    let context = variables(None).to_context().unwrap();

    let err = engine.render("broken.txt", "{{ projectName ", &context).unwrap_err();
    match err {
        Error::RenderError { path, .. } => assert_eq!(path, "broken.txt"),
        other => panic!("Expected RenderError, got {other:?}"),
    }
}
