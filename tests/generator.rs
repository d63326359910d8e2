//! Tests for partial class synthesis, connection grouping and member generation.
mod common;
use common::*;
use nibgen::prelude::*;

fn generate(document: &Document) -> Vec<TypeDeclaration> {
    Generator::builder()
        .build()
        .generate(document)
        .expect("Failed to generate")
}

#[test]
fn test_single_label_outlet_scenario() {
    let mut fixture = Fixture::new();
    let label = fixture.custom_object(Node::generic(Some(5), "IBUILabel"), "MyLabel");
    fixture.outlet("titleLabel", label, label);
    let declarations = generate(&fixture.build());

    assert_eq!(declarations.len(), 1);
    let declaration = &declarations[0];
    assert_eq!(declaration.name, "MyLabel");
    assert!(declaration.is_partial);
    assert_eq!(
        declaration.attributes,
        vec![Attribute::new("MonoTouch.Foundation.Register", "MyLabel")]
    );
    assert_eq!(
        declaration.base_type_hint,
        Some(TypeRef::new("MonoTouch.UIKit.UILabel"))
    );

    assert_eq!(declaration.members.len(), 1);
    let outlet = declaration.members[0].as_outlet().expect("Expected an outlet");
    assert_eq!(outlet.name, "titleLabel");
    assert_eq!(outlet.type_ref, "MonoTouch.UIKit.UILabel");
    assert_eq!(outlet.visibility, Visibility::Private);
    assert_eq!(
        outlet.attribute,
        Attribute::new("MonoTouch.Foundation.Connect", "titleLabel")
    );
    assert_eq!(
        outlet.getter,
        Accessor::GetNativeField {
            field: "titleLabel".to_string(),
            cast: TypeRef::new("MonoTouch.UIKit.UILabel"),
        }
    );
    assert_eq!(
        outlet.setter,
        Accessor::SetNativeField {
            field: "titleLabel".to_string()
        }
    );
}

#[test]
fn test_missing_objects_container_yields_nothing() {
    let mut document = create_controller_document();
    document
        .properties
        .shift_remove(nibgen::document::OBJECTS_KEY);
    assert!(generate(&document).is_empty());
    assert!(generate(&Document::new()).is_empty());
}

#[test]
fn test_missing_connection_records_yields_nothing() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::proxy(Some(1)), "MainViewController");
    fixture.with_connection_records = false;
    assert!(generate(&fixture.build()).is_empty());
}

#[test]
fn test_missing_catalogue_approves_nothing() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(1)), "MainViewController");
    let label = fixture.object(Node::generic(Some(2), "IBUILabel"));
    fixture.outlet("label", owner, label);
    fixture.with_catalogue = false;
    assert!(generate(&fixture.build()).is_empty());
}

#[test]
fn test_unapproved_class_is_skipped() {
    let mut fixture = Fixture::new();
    fixture.object(Node::proxy(Some(1)));
    fixture.custom_class(1, "NotInCatalogue");
    fixture.custom_object(Node::generic(Some(2), "IBUIView"), "ApprovedView");
    let declarations = generate(&fixture.build());
    let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["ApprovedView"]);
}

#[test]
fn test_reserved_root_classes_are_never_declared() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::generic(Some(1), "IBUICustomObject"), "UIApplication");
    fixture.custom_object(Node::generic(Some(2), "IBUICustomObject"), "UIResponder");
    fixture.custom_object(Node::generic(Some(3), "IBUICustomObject"), "AppDelegate");
    let declarations = generate(&fixture.build());
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].name, "AppDelegate");
}

#[test]
fn test_custom_reserved_class() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::generic(Some(3), "IBUICustomObject"), "AppDelegate");
    let declarations = Generator::builder()
        .with_reserved_class("AppDelegate")
        .build()
        .generate(&fixture.build())
        .expect("Failed to generate");
    assert!(declarations.is_empty());
}

#[test]
fn test_actions_sharing_a_label_with_mixed_senders() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(7)), "TapController");
    let button = fixture.object(Node::generic(Some(20), "IBUIButton"));
    let slider = fixture.object(Node::generic(Some(21), "IBUISlider"));
    fixture.action("onTap:", button, owner);
    fixture.action("onTap:", slider, owner);
    let declarations = generate(&fixture.build());

    let declaration = &declarations[0];
    let actions: Vec<_> = declaration.actions().collect();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].name, "onTap");
    assert_eq!(actions[0].selector, "onTap:");
    assert_eq!(actions[0].attribute.argument, "onTap:");
    assert_eq!(actions[0].sender.name, "sender");
    assert_eq!(actions[0].sender.type_ref, "MonoTouch.Foundation.NSObject");
}

#[test]
fn test_actions_sharing_a_label_with_same_sender_type() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(7)), "TapController");
    let first = fixture.object(Node::generic(Some(20), "IBUIButton"));
    let second = fixture.object(Node::generic(Some(21), "IBUIButton"));
    fixture.action("onTap:", first, owner);
    fixture.action("onTap:", second, owner);
    fixture.action("onReset:", first, owner);
    let declarations = generate(&fixture.build());

    let actions: Vec<_> = declarations[0].actions().collect();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].name, "onTap");
    assert_eq!(actions[0].sender.type_ref, "MonoTouch.UIKit.UIButton");
    assert_eq!(actions[1].name, "onReset");
}

#[test]
fn test_first_mismatch_falls_back_even_if_later_senders_agree() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(7)), "TapController");
    let button = fixture.object(Node::generic(Some(20), "IBUIButton"));
    let switch = fixture.object(Node::generic(Some(21), "IBUISwitch"));
    fixture.action("toggle:", button, owner);
    fixture.action("toggle:", switch, owner);
    fixture.action("toggle:", button, owner);
    let declarations = generate(&fixture.build());
    let action = declarations[0].actions().next().expect("Expected an action");
    assert_eq!(action.sender.type_ref, "MonoTouch.Foundation.NSObject");
}

#[test]
fn test_non_generic_sender_maps_to_foundation_object() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(7)), "TapController");
    let responder = fixture.object(Node::proxy(Some(8)));
    fixture.action("becomeActive:", responder, owner);
    let declarations = generate(&fixture.build());
    let action = declarations[0].actions().next().expect("Expected an action");
    assert_eq!(action.sender.type_ref, "MonoTouch.Foundation.NSObject");
}

#[test]
fn test_outlets_sharing_a_label_are_not_merged() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(1)), "MainViewController");
    let first = fixture.object(Node::generic(Some(2), "IBUILabel"));
    let second = fixture.object(Node::generic(Some(3), "IBUITextField"));
    fixture.outlet("field", owner, first);
    fixture.outlet("field", owner, second);
    let declarations = generate(&fixture.build());

    let outlets: Vec<_> = declarations[0].outlets().collect();
    assert_eq!(outlets.len(), 2);
    assert_eq!(outlets[0].type_ref, "MonoTouch.UIKit.UILabel");
    assert_eq!(outlets[1].type_ref, "MonoTouch.UIKit.UITextField");
}

#[test]
fn test_outlet_to_non_generic_widget_is_system_object() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::generic(Some(1), "IBUICustomObject"), "Helper");
    let proxy = fixture.object(Node::proxy(Some(2)));
    fixture.outlet("owner", owner, proxy);
    let declarations = generate(&fixture.build());
    let outlet = declarations[0].outlets().next().expect("Expected an outlet");
    assert_eq!(outlet.type_ref, "System.Object");
}

#[test]
fn test_external_nib_object_is_not_declared() {
    let mut fixture = Fixture::new();
    let controller = fixture.custom_object(
        Node::generic(Some(4), "IBUIViewController")
            .with_property("IBUINibName", Value::string("DetailView")),
        "DetailViewController",
    );
    let empty_nib = fixture.custom_object(
        Node::generic(Some(5), "IBUIViewController")
            .with_property("IBUINibName", Value::string("")),
        "InlineViewController",
    );
    let label = fixture.object(Node::generic(Some(6), "IBUILabel"));
    fixture.outlet("title", controller, label);
    fixture.outlet("title", empty_nib, label);
    let declarations = generate(&fixture.build());

    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].name, "InlineViewController");
    assert_eq!(declarations[0].members.len(), 1);
}

#[test]
fn test_base_type_hints() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::proxy(Some(1)), "Owner");
    fixture.custom_object(Node::generic(Some(2), "IBUICustomObject"), "Delegate");
    fixture.custom_object(Node::generic(Some(3), "IBUITableView"), "MyTable");
    fixture.custom_object(Node::generic(Some(4), "IBProxyObject"), "Weird");
    let declarations = generate(&fixture.build());

    let hints: Vec<_> = declarations
        .iter()
        .map(|d| d.base_type_hint.as_ref().map(TypeRef::as_str))
        .collect();
    assert_eq!(
        hints,
        vec![
            Some("MonoTouch.UIKit.UIViewController"),
            Some("MonoTouch.Foundation.NSObject"),
            Some("MonoTouch.UIKit.UITableView"),
            Some("MonoTouch.Foundation.NSObject"),
        ]
    );
    assert_eq!(
        declarations[0].comments[0],
        "Base type probably should be MonoTouch.UIKit.UIViewController or subclass"
    );
}

#[test]
fn test_declaration_without_connections_is_kept() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::generic(Some(3), "IBUIView"), "BareView");
    let declarations = generate(&fixture.build());
    assert_eq!(declarations.len(), 1);
    assert!(declarations[0].members.is_empty());
}

#[test]
fn test_connections_to_undeclared_owner_are_dropped() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::proxy(Some(1)), "Owner");
    let plain = fixture.object(Node::generic(Some(2), "IBUIView"));
    let label = fixture.object(Node::generic(Some(3), "IBUILabel"));
    fixture.outlet("label", plain, label);
    let declarations = generate(&fixture.build());
    assert_eq!(declarations.len(), 1);
    assert!(declarations[0].members.is_empty());
}

#[test]
fn test_object_record_without_identity_is_skipped() {
    let mut fixture = Fixture::new();
    fixture.object_declared_as(Node::generic(None, "IBUIView"), 9);
    fixture.custom_class(9, "Anonymous");
    fixture.approve("Anonymous");
    assert!(generate(&fixture.build()).is_empty());
}

#[test]
fn test_declaration_is_keyed_by_resolved_identity() {
    // The record declares 9, the custom class is looked up under 9, but the
    // connections reach the object through its own identity 30.
    let mut fixture = Fixture::new();
    let view = fixture.object_declared_as(Node::generic(Some(30), "IBUIView"), 9);
    fixture.custom_class(9, "RenamedView");
    fixture.approve("RenamedView");
    let label = fixture.object(Node::generic(Some(31), "IBUILabel"));
    fixture.outlet("caption", view, label);
    let declarations = generate(&fixture.build());
    assert_eq!(declarations[0].name, "RenamedView");
    assert_eq!(declarations[0].members.len(), 1);
}

#[test]
fn test_duplicate_identity_last_record_wins() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::generic(Some(1), "IBUIView"), "First");
    fixture.object_declared_as(Node::generic(Some(1), "IBUIButton"), 2);
    fixture.custom_class(2, "Second");
    fixture.approve("Second");
    fixture.custom_object(Node::generic(Some(3), "IBUIView"), "Third");
    let declarations = generate(&fixture.build());

    let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "Third"]);
}

#[test]
fn test_unsupported_connections_are_ignored() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(1)), "Owner");
    let label = fixture.object(Node::generic(Some(2), "IBUILabel"));
    fixture.connect(Connection::Unsupported {
        class: "IBBindingConnection".to_string(),
    });
    fixture.outlet("label", owner, label);
    fixture.connections.push(Value::string("not a record"));
    let declarations = generate(&fixture.build());
    assert_eq!(declarations[0].members.len(), 1);
}

#[test]
fn test_owner_without_identity_aborts_generation() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(1)), "Owner");
    let label = fixture.object(Node::generic(Some(2), "IBUILabel"));
    let anonymous = fixture.add(Node::generic(None, "IBUIView"));
    fixture.outlet("label", owner, label);
    let bad = fixture.outlet("orphan", anonymous, label);

    let result = Generator::builder().build().generate(&fixture.build());
    assert_eq!(
        result,
        Err(GenerateError::NullOwnerIdentity { connection_id: bad })
    );
}

#[test]
fn test_action_owner_without_identity_aborts_generation() {
    let mut fixture = Fixture::new();
    let button = fixture.object(Node::generic(Some(2), "IBUIButton"));
    let dangling = fixture.add(Node::reference(None, Value::Null));
    let bad = fixture.action("onTap:", button, dangling);

    let err = Generator::builder()
        .build()
        .generate(&fixture.build())
        .unwrap_err();
    assert!(err.to_string().contains(&bad.to_string()));
}

#[test]
fn test_generation_is_idempotent() {
    let document = create_controller_document();
    let generator = Generator::builder().build();
    let first = generator.generate(&document).expect("Failed to generate");
    let second = generator.generate(&document).expect("Failed to generate");
    assert_eq!(first, second);
}

#[test]
fn test_declarations_follow_document_order() {
    let mut fixture = Fixture::new();
    fixture.custom_object(Node::generic(Some(50), "IBUIView"), "Zeta");
    fixture.custom_object(Node::generic(Some(3), "IBUIView"), "Alpha");
    fixture.custom_object(Node::generic(Some(27), "IBUIView"), "Mu");
    let declarations = generate(&fixture.build());
    let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
}

#[test]
fn test_action_stub_listing_is_attached() {
    let declarations = generate(&create_controller_document());
    let declaration = &declarations[0];
    assert_eq!(declaration.comments.len(), 2);
    assert_eq!(
        declaration.comments[1],
        "Action method stubs:\n\n\
         [MonoTouch.Foundation.Export(\"buttonPressed:\")]\n\
         partial void buttonPressed(MonoTouch.UIKit.UIButton sender);\n\n"
    );
}

struct FailingFormatter;

impl MemberFormatter for FailingFormatter {
    fn format_member(
        &self,
        member: &Member,
        _out: &mut String,
    ) -> std::result::Result<(), EmitError> {
        Err(EmitError::InvalidIdentifier(member.name().to_string()))
    }
}

#[test]
fn test_failed_stub_listing_keeps_the_member() {
    let declarations = Generator::builder()
        .with_member_formatter(Box::new(FailingFormatter))
        .build()
        .generate(&create_controller_document())
        .expect("Failed to generate");
    let declaration = &declarations[0];
    assert_eq!(declaration.comments.len(), 1);
    assert_eq!(declaration.actions().count(), 1);
    assert_eq!(declaration.outlets().count(), 1);
}

#[test]
fn test_unformattable_label_only_loses_its_note() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(1)), "Owner");
    let button = fixture.object(Node::generic(Some(2), "IBUIButton"));
    fixture.action("not valid:", button, owner);
    fixture.action("valid:", button, owner);
    let declarations = generate(&fixture.build());

    let declaration = &declarations[0];
    assert_eq!(declaration.actions().count(), 2);
    assert_eq!(declaration.comments.len(), 2);
    assert!(declaration.comments[1].contains("partial void valid("));
}

#[test]
fn test_stub_notes_can_be_disabled() {
    let declarations = Generator::builder()
        .without_stub_notes()
        .build()
        .generate(&create_controller_document())
        .expect("Failed to generate");
    assert_eq!(declarations[0].comments.len(), 1);
    assert_eq!(declarations[0].actions().count(), 1);
}

#[test]
fn test_custom_family_and_unified_namespace() {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(1)), "GameController");
    let scene = fixture.object(Node::generic(Some(2), "IBSKView"));
    let map = fixture.object(Node::generic(Some(3), "IBMKMapView"));
    let date = fixture.object(Node::generic(Some(4), "NSDateFormatter"));
    fixture.outlet("scene", owner, scene);
    fixture.outlet("map", owner, map);
    fixture.outlet("formatter", owner, date);

    let declarations = Generator::builder()
        .with_root_namespace("")
        .with_family_namespace("SK", "SpriteKit")
        .build()
        .generate(&fixture.build())
        .expect("Failed to generate");

    let declaration = &declarations[0];
    assert_eq!(declaration.attributes[0].name, "Foundation.Register");
    assert_eq!(
        declaration.base_type_hint,
        Some(TypeRef::new("UIKit.UIViewController"))
    );
    let types: Vec<_> = declaration.outlets().map(|o| o.type_ref.as_str()).collect();
    assert_eq!(
        types,
        vec!["SpriteKit.SKView", "MapKit.MKMapView", "Foundation.NSDateFormatter"]
    );
}
