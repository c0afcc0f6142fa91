use withbem_core::{
    classes, component_fn, conditional, template, with_bem_named, BemHelper, BemOptions, BemProps, VNode,
};

fn div(class: &str) -> VNode {
    VNode::element("div").with_class(class)
}

#[test]
fn test_block_with_elements() {
    let acme = with_bem_named(
        "Acme",
        component_fn(|_: &(), bem: &BemHelper| {
            VNode::element("div").with_class(bem.class_name()).with_child(
                VNode::element("h1")
                    .with_class(bem.element("heading"))
                    .with_child(VNode::text("Hello")),
            )
        }),
    );

    let expected = div("acme").with_child(
        VNode::element("h1")
            .with_class("acme__heading")
            .with_child(VNode::text("Hello")),
    );
    assert_eq!(acme.mount().render(&BemProps::default()), expected);
}

#[test]
fn test_helper_as_class_shorthand() {
    let acme = with_bem_named(
        "Acme",
        component_fn(|_: &(), bem: &BemHelper| {
            VNode::element("div").with_class(bem).with_child(VNode::text("Hello"))
        }),
    );

    let html = acme.mount().render(&BemProps::default()).render_to_string();
    assert_eq!(html, "<div class=\"acme\">Hello</div>");
}

struct ToggleProps {
    toggle: bool,
}

#[test]
fn test_block_modifiers_from_props() {
    let acme = with_bem_named(
        "Acme",
        component_fn(|props: &ToggleProps, bem: &BemHelper| {
            div(&bem.block(template![conditional! { "toggle" => props.toggle }, " always-enabled"]))
        }),
    );
    let instance = acme.mount();

    let on = instance.render(&BemProps::new(ToggleProps { toggle: true }));
    assert_eq!(on.class(), Some("acme acme--toggle acme--always-enabled"));

    let off = instance.render(&BemProps::new(ToggleProps { toggle: false }));
    assert_eq!(off.class(), Some("acme acme--always-enabled"));
    assert_eq!(instance.helper_computations(), 1);
}

#[test]
fn test_mixing_block_with_other_classes() {
    let acme = with_bem_named(
        "Acme",
        component_fn(|_: &(), bem: &BemHelper| div(&bem.block(template![]).mix("me-2 d-flex"))),
    );

    assert_eq!(acme.mount().render(&BemProps::default()), div("acme me-2 d-flex"));
}

#[test]
fn test_mixing_with_parent_block() {
    let child = with_bem_named(
        "Child",
        component_fn(|_: &(), bem: &BemHelper| {
            div(&bem.block(conditional! { "active" => true }).mix("me-2"))
        }),
    );
    let child_instance = child.mount();

    let parent = with_bem_named(
        "Parent",
        component_fn(move |_: &(), bem: &BemHelper| {
            VNode::element("div")
                .with_class(bem.class_name())
                .with_child(child_instance.render(&BemProps::new(()).with_class_name(bem.element("element"))))
        }),
    );

    let expected = div("parent").with_child(div("child parent__element child--active me-2"));
    assert_eq!(parent.mount().render(&BemProps::default()), expected);
}

#[test]
fn test_elements_with_modifiers() {
    let acme = with_bem_named(
        "Acme",
        component_fn(|_: &(), bem: &BemHelper| {
            VNode::element("div").with_class(bem.class_name()).with_children(vec![
                div(&bem.element(template!["item ", conditional! { "selected" => true }, " me-2"])),
                div(&bem.element(template!["item ", conditional! { "variant" => "primary" }])),
                div(&bem.element(template!["item ", classes!["theme-dark"]])),
                div(&bem.element("item").mix("d-flex")),
            ])
        }),
    );

    let expected = div("acme").with_children(vec![
        div("acme__item acme__item--selected me-2"),
        div("acme__item acme__item--variant-primary"),
        div("acme__item acme__item--theme-dark"),
        div("acme__item d-flex"),
    ]);
    assert_eq!(acme.mount().render(&BemProps::default()), expected);
}

#[test]
fn test_custom_separators() {
    let options = BemOptions {
        element_separator: "-".to_string(),
        modifier_separator: "_".to_string(),
    };
    let card = with_bem_named(
        "ProductCard",
        component_fn(|_: &(), bem: &BemHelper| {
            div(&bem.block("featured")).with_child(div(&bem.element(template!["title ", classes!["large"]])))
        }),
    )
    .with_options(options);

    let expected = div("product-card product-card_featured")
        .with_child(div("product-card-title product-card-title_large"));
    assert_eq!(card.mount().render(&BemProps::default()), expected);
}
