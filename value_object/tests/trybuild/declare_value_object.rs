use value_object::declare::{Bytes, Collection, Date, Datetime, Decimal, Nested, Primitive};
use value_object::{ValueObject, ValueObjectSchema, raw_map};

#[derive(ValueObject)]
struct Address {
    street: Primitive,
}

#[derive(ValueObject)]
#[value_object(name = "Applicant", rename_all = "camelCase")]
struct ApplicantRecord {
    full_name: Primitive,
    #[value_object(key = "dob")]
    date_of_birth: Date,
    signed_at: Datetime,
    #[value_object(public = false)]
    income: Decimal,
    #[value_object(encoding = "ascii")]
    photo: Bytes,
    #[value_object(public("street"))]
    addresses: Collection<Nested<Address>>,
    tags: Collection,
}

fn main() {
    let vo_type = ApplicantRecord::value_object_type();
    assert_eq!(vo_type.key_of("date_of_birth"), Some("dob"));
    assert_eq!(vo_type.key_of("signed_at"), Some("signedAt"));
    let applicant = ApplicantRecord::construct(raw_map(serde_json::json!({"fullName": "Marcus"})));
    assert!(applicant.is_ok());
}
