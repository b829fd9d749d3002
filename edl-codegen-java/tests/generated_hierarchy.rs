//! End-to-end checks over a full generated hierarchy.
//!
//! These tests compile a realistic spec through the public pipeline and
//! assert on the emitted Java source: the inheritance chain, builder
//! guards, and the handler wiring.

use edl_codegen::CompilationUnit;
use edl_codegen_java::Generator;
use edl_spec::SpecDocument;

const SPEC: &str = "\
package: com.example.catalog
baseException: Catalog
source: catalog-service
response:
  source: Source
  code: ReasonCode
  description: Description
  detail: Detail
  details: Details
  recoverable: Recoverable
containerResponse:
  Error:
    - Source: source
      ReasonCode: code
categories:
  Input:
    codePrefix: IN
    httpStatus: 400
  Validation:
    parent: Input
    codePrefix: VAL
    httpStatus: 422
  Auth:
    codePrefix: AUT
    httpStatus: 401
    container: true
    retryable: false
errors:
  missingField:
    category: Validation
    fixed:
      code: 12
      description: \"Field {field} is missing\"
      detail: \"Required field {field} was not supplied\"
    required:
      field: String
  tokenExpired:
    category: Auth
    fixed:
      code: 3
      description: \"Token expired after {ttl} seconds\"
      details: \"Token for {user} expired\"
    required:
      user: String
      ttl: long
    recoverable: true
";

fn generate(handler: bool) -> Vec<CompilationUnit> {
    let document = SpecDocument::from_str(SPEC, "edl.yaml").expect("valid yaml");
    let ctx = edl_codegen::pipeline::Pipeline::new()
        .run(document)
        .expect("pipeline runs");
    assert!(ctx.can_generate(), "diagnostics: {:?}", ctx.diagnostics);
    let spec = ctx.spec.as_ref().expect("spec present");
    Generator::new(spec).with_handler(handler).preview()
}

fn unit<'a>(units: &'a [CompilationUnit], name: &str) -> &'a str {
    units
        .iter()
        .find(|u| u.path().file_name().is_some_and(|f| f == name))
        .unwrap_or_else(|| panic!("{name} not generated"))
        .content()
}

#[test]
fn inheritance_chain_is_linked() {
    let units = generate(false);
    assert!(
        unit(&units, "CatalogException.java")
            .contains("public abstract class CatalogException extends RuntimeException")
    );
    assert!(
        unit(&units, "InputException.java")
            .contains("public abstract class InputException extends CatalogException")
    );
    assert!(
        unit(&units, "ValidationException.java")
            .contains("public abstract class ValidationException extends InputException")
    );
    assert!(
        unit(&units, "MissingFieldException.java")
            .contains("public final class MissingFieldException extends ValidationException")
    );
}

#[test]
fn code_prefixes_compound_down_the_chain() {
    let units = generate(false);
    // each category prepends its own prefix on the way up
    assert!(
        unit(&units, "ValidationException.java")
            .contains("super(CODE_PREFIX + Objects.requireNonNull(errorCode, \"errorCode\")")
    );
    assert!(
        unit(&units, "ValidationException.java")
            .contains("private static final String CODE_PREFIX = \"VAL\";")
    );
    assert!(
        unit(&units, "MissingFieldException.java")
            .contains("public static final String ERROR_CODE = \"0012\";")
    );
}

#[test]
fn http_status_overrides_inherit_down() {
    let units = generate(false);
    let base = unit(&units, "CatalogException.java");
    assert!(base.contains("public int httpStatus() {\n    return 500;"));
    let validation = unit(&units, "ValidationException.java");
    assert!(validation.contains("@Override\n  public int httpStatus() {\n    return 422;"));
}

#[test]
fn builder_guards_match_param_kinds() {
    let units = generate(false);
    let token = unit(&units, "TokenExpiredException.java");
    // required reference param and required primitive param both guarded
    assert!(token.contains("throw new IllegalStateException(\"Missing required param: user\");"));
    assert!(token.contains("throw new IllegalStateException(\"Missing required param: ttl\");"));
    // primitive held boxed, unboxed at construction
    assert!(token.contains("private Long ttl;"));
    assert!(token.contains("public Builder ttl(long ttl) {"));
    assert!(token.contains("resolvedTtl.longValue()"));
    // detail spelled with the `details` key still lands in DETAIL_TEMPLATE
    assert!(token.contains(
        "public static final String DETAIL_TEMPLATE = \"Token for {user} expired\";"
    ));
}

#[test]
fn container_units_generated_for_container_categories() {
    let units = generate(false);
    assert!(
        unit(&units, "ContainerExceptionBase.java")
            .contains("protected final List<CatalogException> errors = new ArrayList<>();")
    );
    let auth_container = unit(&units, "AuthContainerException.java");
    assert!(auth_container.contains("private static final int HTTP_STATUS = 401;"));
    assert!(auth_container.contains("super(HTTP_STATUS);"));
}

#[test]
fn handler_pair_only_when_enabled() {
    let without = generate(false);
    assert!(
        !without
            .iter()
            .any(|u| u.path().to_string_lossy().contains("Handler"))
    );

    let with = generate(true);
    let handler = unit(&with, "CatalogExceptionHandler.java");
    assert!(handler.contains("@RestControllerAdvice"));
    assert!(handler.contains("@ExceptionHandler(AuthContainerException.class)"));

    let handler_base = unit(&with, "ExceptionHandlerBase.java");
    assert!(handler_base.contains("body.put(\"ReasonCode\", info.get(\"code\"));"));
    assert!(handler_base.contains(
        "Map.entry(\"Error\", List.of(Map.ofEntries(Map.entry(\"Source\", \"source\"), \
         Map.entry(\"ReasonCode\", \"code\"))))"
    ));
}

#[test]
fn every_unit_is_well_formed_java() {
    for unit in generate(true) {
        let content = unit.content();
        if unit.path().extension().is_some_and(|e| e == "java") {
            assert!(
                content.starts_with("package com.example.catalog;\n"),
                "bad package decl in {}",
                unit.path().display()
            );
            let opens = content.matches('{').count();
            let closes = content.matches('}').count();
            assert_eq!(
                opens,
                closes,
                "unbalanced braces in {}",
                unit.path().display()
            );
        }
    }
}
