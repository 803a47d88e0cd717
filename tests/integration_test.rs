//! End-to-end flow: hydrate stub metadata from a compiled descriptor set,
//! resolve an annotated endpoint URL against it, and map the stream schema.

use prost::Message as _;
use prost_reflect::DescriptorPool;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, ServiceDescriptorProto,
};

use protomap::{
    Annotation, AttributeType, MethodPath, NativeType, StreamCatalog, StreamScope, UrlQuery,
    describe_fields, find_url, native_type,
};

struct ParsedApp {
    streams: Vec<(String, Vec<Annotation>)>,
}

impl StreamCatalog for ParsedApp {
    fn stream_definitions(&self) -> Box<dyn Iterator<Item = (&str, &[Annotation])> + '_> {
        Box::new(
            self.streams
                .iter()
                .map(|(id, annotations)| (id.as_str(), annotations.as_slice())),
        )
    }
}

fn sensor_app() -> ParsedApp {
    ParsedApp {
        streams: vec![
            (
                "LogStream".to_owned(),
                vec![Annotation::new("sink").with_element("type", "log")],
            ),
            (
                "FooStream".to_owned(),
                vec![
                    Annotation::new("sink")
                        .with_element("type", "grpc")
                        .with_element("sink.id", "1")
                        .with_element(
                            "publisher.url",
                            "grpc://localhost:8889/org.example.EventService/consume",
                        ),
                ],
            ),
        ],
    }
}

fn scalar_field(name: &str, number: i32, r#type: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_owned()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(r#type as i32),
        ..Default::default()
    }
}

fn event_descriptor_set() -> FileDescriptorSet {
    let event = DescriptorProto {
        name: Some("Event".to_owned()),
        field: vec![
            scalar_field("message", 1, Type::String),
            scalar_field("sensor_count", 2, Type::Int64),
            scalar_field("value", 3, Type::Double),
            scalar_field("active", 4, Type::Bool),
        ],
        ..Default::default()
    };

    let service = ServiceDescriptorProto {
        name: Some("EventService".to_owned()),
        method: vec![MethodDescriptorProto {
            name: Some("Consume".to_owned()),
            input_type: Some(".org.example.Event".to_owned()),
            output_type: Some(".org.example.Event".to_owned()),
            ..Default::default()
        }],
        ..Default::default()
    };

    FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("event.proto".to_owned()),
            package: Some("org.example".to_owned()),
            message_type: vec![event],
            service: vec![service],
            syntax: Some("proto3".to_owned()),
            ..Default::default()
        }],
    }
}

#[test]
fn test_annotation_url_resolves_against_descriptor_registry() {
    let url = find_url(
        &sensor_app(),
        &UrlQuery {
            category: "sink",
            annotation_type: "grpc",
            url_key: "publisher.url",
            mapping_key: "sink.id",
            id: "1",
        },
    )
    .expect("grpc sink annotation present");

    let scope = StreamScope::new("SensorApp", "FooStream");
    let path = MethodPath::from_url(&url, &scope).unwrap();
    assert_eq!(path.service, "org.example.EventService");
    assert_eq!(path.method, "consume");

    let registry =
        protomap::descriptor::registry_from_descriptor_set(&event_descriptor_set().encode_to_vec())
            .unwrap();
    let methods = registry.rpc_method_names(&path.service, &scope).unwrap();
    assert!(methods.contains(&path.method));
}

#[test]
fn test_unknown_service_reference_is_reported_with_scope() {
    let registry =
        protomap::descriptor::registry_from_descriptor_set(&event_descriptor_set().encode_to_vec())
            .unwrap();

    let scope = StreamScope::new("SensorApp", "FooStream");
    let err = registry
        .rpc_method_names("org.example.NoSuchService", &scope)
        .unwrap_err();
    assert!(err.to_string().contains("SensorApp: FooStream"));
    assert!(err.to_string().contains("NoSuchService"));
}

#[test]
fn test_stream_schema_maps_to_native_types() {
    let schema = [
        ("message", AttributeType::String),
        ("sensorCount", AttributeType::Long),
        ("value", AttributeType::Double),
        ("active", AttributeType::Bool),
    ];

    let mapped: Vec<NativeType> = schema
        .iter()
        .map(|(_, ty)| native_type(*ty).unwrap())
        .collect();
    assert_eq!(
        mapped,
        vec![
            NativeType::String,
            NativeType::Int64,
            NativeType::Float64,
            NativeType::Bool,
        ]
    );
}

#[test]
fn test_message_fields_describe_for_diagnostics() {
    let pool = DescriptorPool::from_file_descriptor_set(event_descriptor_set()).unwrap();
    let event = pool.get_message_by_name("org.example.Event").unwrap();

    let described = describe_fields(&protomap::descriptor::message_fields(&event));
    assert_eq!(
        described,
        "{ 'message' : String , 'sensorCount' : long , 'value' : double , 'active' : boolean }"
    );
}
