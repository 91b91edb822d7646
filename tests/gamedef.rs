
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use dekit::{DekitError, SpaceType};
use dekit::gamedef::{
    ApplicationType, Billboard, BillboardProperty, FieldType, ForceField, ForceFieldProperty,
    ForceFieldTrigger, Light, LightMovementHint, LightParameterHint, LightProperty, LightTrigger,
    LightType, NavigationSpaceDef, NavigationSpaceProperty, ObjectClass, ObjectList,
    PropertyNames, PropertyRole, ScaleMode,
};
use fixtures::{random_identifier, tag_set};
use glam::{Vec2, Vec3};

fn assert_link_targets<P: PropertyRole>() {
    let targets: BTreeSet<&str> = P::ALL.iter().map(|role| role.link_target()).collect();
    assert_eq!(targets.len(), P::ALL.len(), "duplicate link target");

    for role in P::ALL {
        assert_eq!(P::from_link_target(role.link_target()), Some(*role));
    }
    assert_eq!(P::from_link_target(""), None);
    assert_eq!(P::from_link_target("noSuchTarget"), None);
}

#[test]
#[ntest::timeout(100)]
fn test_link_targets_are_unique_and_reversible() {
    assert_link_targets::<BillboardProperty>();
    assert_link_targets::<LightProperty>();
    assert_link_targets::<LightTrigger>();
    assert_link_targets::<NavigationSpaceProperty>();
    assert_link_targets::<ForceFieldProperty>();
    assert_link_targets::<ForceFieldTrigger>();

    assert_eq!(BillboardProperty::ALL.len(), 7);
    assert_eq!(LightProperty::ALL.len(), 17);
    assert_eq!(NavigationSpaceProperty::ALL.len(), 8);
    assert_eq!(ForceFieldProperty::ALL.len(), 13);
    assert_eq!(LightProperty::HalfIntDist.link_target(), "halfIntensityDistance");
    assert_eq!(BillboardProperty::RenderEnvMap.link_target(), "renderEnvMap");
}

#[test]
#[ntest::timeout(100)]
fn test_property_names_default_to_empty() {
    let names = PropertyNames::<LightProperty>::new();

    for role in LightProperty::ALL {
        assert_eq!(names.get(*role), "");
        assert!(!names.is_set(*role));
    }
    assert!(names.is_empty());
    assert!(!names.has_property_with_name(""));
}

#[test]
#[ntest::timeout(100)]
fn test_property_names_set_and_unbind() {
    let mut names = PropertyNames::new();
    names.set(BillboardProperty::Skin, "billboardSkin");
    names.set(BillboardProperty::Locked, "locked");

    assert_eq!(names.get(BillboardProperty::Skin), "billboardSkin");
    assert!(names.is_set(BillboardProperty::Locked));
    assert_eq!(names.count(), 2);
    assert!(names.has_property_with_name("locked"));
    assert!(!names.has_property_with_name("axis"));

    names.set(BillboardProperty::Skin, "");
    assert!(!names.is_set(BillboardProperty::Skin));
    assert_eq!(names.get(BillboardProperty::Skin), "");
    assert_eq!(names.count(), 1);

    names.clear();
    assert!(names.is_empty());
}

#[test]
#[ntest::timeout(100)]
fn test_property_names_shared_by_several_roles() {
    let mut names = PropertyNames::new();
    let shared = random_identifier();
    names.set(ForceFieldProperty::Shape, shared.as_str());
    names.set(ForceFieldProperty::InfluenceArea, shared.as_str());
    names.set(ForceFieldProperty::Force, format!("{}Force", shared));

    let roles: Vec<_> = names.roles_with_name(&shared).collect();
    assert_eq!(
        roles,
        vec![ForceFieldProperty::InfluenceArea, ForceFieldProperty::Shape]
    );

    let bound: Vec<_> = names.iter().map(|(role, _)| role).collect();
    assert_eq!(
        bound,
        vec![
            ForceFieldProperty::InfluenceArea,
            ForceFieldProperty::Force,
            ForceFieldProperty::Shape
        ]
    );
}

#[test]
#[ntest::timeout(100)]
fn test_billboard_defaults() {
    let billboard = Billboard::new();

    assert_eq!(billboard.axis, Vec3::Y);
    assert_eq!(billboard.size, Vec2::ONE);
    assert_eq!(billboard.offset, Vec2::ZERO);
    assert!(billboard.locked);
    assert!(billboard.spherical);
    assert!(!billboard.size_fixed_to_screen);
    assert!(!billboard.do_not_scale);
    assert!(!billboard.partial_hide);
    assert!(!billboard.render_env_map);
    assert!(billboard.skin_path.is_empty());
    assert!(billboard.property_names.is_empty());
}

#[test]
#[ntest::timeout(100)]
fn test_light_defaults() {
    let light = Light::new();

    assert_eq!(light.light_type, LightType::Point);
    assert_eq!(light.color, Vec3::ONE);
    assert_eq!(light.intensity, 1.0);
    assert_eq!(light.range, 10.0);
    assert_eq!(light.half_intensity_distance, 0.1);
    assert_eq!(light.spot_angle, 30.0);
    assert!(light.activated);
    assert!(light.cast_shadows);
    assert_eq!(light.hint_light_importance, 100);
    assert_eq!(light.hint_shadow_importance, 100);
    assert_eq!(light.hint_movement, LightMovementHint::Dynamic);
    assert_eq!(light.hint_parameter, LightParameterHint::Dynamic);
    assert!(light.trigger_names.is_empty());
}

#[test]
#[ntest::timeout(100)]
fn test_light_keywords() {
    for light_type in [LightType::Point, LightType::Spot, LightType::Projector] {
        assert_eq!(LightType::from_keyword(light_type.keyword()), Some(light_type));
    }
    assert!(LightType::Spot.is_spot());
    assert!(LightType::Projector.is_spot());
    assert!(!LightType::Point.is_spot());

    assert_eq!(LightMovementHint::Stationary.keyword(), "static");
    assert_eq!(
        LightMovementHint::from_keyword("jittering"),
        Some(LightMovementHint::Jittering)
    );
    assert_eq!(
        LightParameterHint::from_keyword("flicker"),
        Some(LightParameterHint::Flicker)
    );
    assert_eq!(LightParameterHint::from_keyword("sometimes"), None);
}

#[test]
#[ntest::timeout(100)]
fn test_navigation_space_definition_defaults() {
    let definition = NavigationSpaceDef::new();

    assert_eq!(definition.space_type, SpaceType::Mesh);
    assert_eq!(definition.snap_distance, 0.001);
    assert_eq!(definition.snap_angle, 180.0);
    assert_eq!(definition.layer, 0);
    assert_eq!(definition.blocking_priority, 0);
    assert!(definition.path.is_empty());
    assert!(definition.blocker_shape.is_empty());

    assert_eq!(SpaceType::from_keyword("grid"), Some(SpaceType::Grid));
    assert_eq!(SpaceType::Volume.keyword(), "volume");
    assert_eq!(SpaceType::from_keyword("Mesh"), None);
}

#[test]
#[ntest::timeout(100)]
fn test_force_field_defaults_and_keywords() {
    let field = ForceField::new();

    assert_eq!(field.field_type, FieldType::Radial);
    assert_eq!(field.application_type, ApplicationType::Direct);
    assert_eq!(field.radius, 1.0);
    assert_eq!(field.exponent, 1.0);
    assert_eq!(field.force, 1.0);
    assert!(field.enabled);

    assert_eq!(FieldType::from_keyword("vortex"), Some(FieldType::Vortex));
    assert_eq!(
        ApplicationType::from_keyword("speed"),
        Some(ApplicationType::Speed)
    );
    assert_eq!(ApplicationType::Surface.keyword(), "surface");
}

#[test]
#[ntest::timeout(100)]
fn test_object_list_membership_is_by_handle() {
    let mut list = ObjectList::new();
    let first = list.add_new(Light::new());
    let twin = Rc::new(RefCell::new(Light::new()));

    assert!(list.has(&first));
    assert!(!list.has(&twin));
    assert!(matches!(
        list.add(Rc::clone(&first)),
        Err(DekitError::InvalidParam { .. })
    ));

    list.add(Rc::clone(&twin)).unwrap();
    assert_eq!(list.count(), 2);
    assert_eq!(list.index_of(&twin), Some(1));
    assert!(Rc::ptr_eq(list.get_at(0).unwrap(), &first));
    assert!(list.get_at(2).is_err());
}

#[test]
#[ntest::timeout(100)]
fn test_object_list_insert_and_remove() {
    let mut list = ObjectList::new();
    let a = list.add_new(Billboard::new());
    let b = list.add_new(Billboard::new());
    let c = Rc::new(RefCell::new(Billboard::new()));

    assert!(list.insert_at(3, Rc::clone(&c)).is_err());
    assert!(list.insert_at(0, Rc::clone(&a)).is_err());
    list.insert_at(1, Rc::clone(&c)).unwrap();

    let order: Vec<_> = list.iter().map(|handle| list.index_of(handle)).collect();
    assert_eq!(order, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(list.index_of(&c), Some(1));
    assert_eq!(list.index_of(&b), Some(2));

    list.remove(&c).unwrap();
    assert!(matches!(list.remove(&c), Err(DekitError::InvalidParam { .. })));
    assert_eq!(list.index_of(&b), Some(1));

    list.remove_all();
    assert!(list.is_empty());
}

#[test]
#[should_panic(expected = "already mutably borrowed")]
fn test_object_list_deep_copy_of_borrowed_element_panics() {
    let mut list = ObjectList::new();
    let light = list.add_new(Light::new());

    let _guard = light.borrow_mut();
    let _copy = list.deep_copy();
}

#[test]
#[ntest::timeout(100)]
fn test_object_list_deep_copy_is_independent() {
    let mut list = ObjectList::new();
    let original = list.add_new(ForceField::new());
    original.borrow_mut().radius = 4.0;

    let copy = list.deep_copy();
    assert_eq!(copy, list);
    let copied = copy.get_at(0).unwrap();
    assert!(!Rc::ptr_eq(copied, &original));

    copied.borrow_mut().radius = 8.0;
    assert_eq!(original.borrow().radius, 4.0);

    let mut target = ObjectList::new();
    target.add_new(ForceField::new());
    target.add_new(ForceField::new());
    target.set_to_deep_copy_from(&list);
    assert_eq!(target.count(), 1);
    assert!(!target.has(&original));
}

#[test]
#[ntest::timeout(100)]
fn test_object_class_defaults() {
    let class = ObjectClass::new("Door");

    assert_eq!(class.name, "Door");
    assert_eq!(class.scale_mode, ScaleMode::Uniform);
    assert!(!class.is_ghost);
    assert!(class.can_instantiate);
    assert_eq!(class.element_count(), 0);
    assert_eq!(ObjectClass::default().name, "");

    assert_eq!(ScaleMode::from_keyword("fixed"), Some(ScaleMode::Fixed));
    assert_eq!(ScaleMode::Free.keyword(), "free");
}

#[test]
#[ntest::timeout(100)]
fn test_object_class_clone_is_deep() {
    let mut class = ObjectClass::new("Lamp");
    class.category = "Lights/Indoor".to_string();
    class.hide_tags = tag_set(&["editorOnly"]);
    let light = class.lights.add_new(Light::new());
    light
        .borrow_mut()
        .property_names
        .set(LightProperty::Color, "lampColor");
    class.billboards.add_new(Billboard::new());
    class.navigation_spaces.add_new(NavigationSpaceDef::new());
    class.force_fields.add_new(ForceField::new());
    assert_eq!(class.element_count(), 4);

    let copy = class.clone();
    assert_eq!(copy, class);
    assert_eq!(copy.element_count(), 4);
    assert!(!copy.lights.has(&light));

    copy.lights
        .get_at(0)
        .unwrap()
        .borrow_mut()
        .property_names
        .set(LightProperty::Color, "");
    assert_eq!(
        light.borrow().property_names.get(LightProperty::Color),
        "lampColor"
    );
    assert_ne!(copy, class);
}
