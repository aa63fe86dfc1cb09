use value_object as vo;
use vo::declare::{Nested, Primitive};
use vo::ValueObjectSchema;

/// Verifies that `#[value_object(crate = "vo")]` routes generated paths
/// through a renamed import of the runtime crate.
#[derive(vo::ValueObject)]
#[value_object(crate = "vo")]
struct Loan {
    amount: Primitive,
}

#[derive(vo::ValueObject)]
#[value_object(crate = "vo", name = "Applicant")]
struct ApplicantRecord {
    loan: Nested<Loan>,
}

fn main() {
    let loan: vo::ValueObjectType = Loan::value_object_type();
    assert_eq!(loan.name(), "Loan");
    let applicant = ApplicantRecord::value_object_type().construct_empty();
    assert!(applicant.get("loan").is_ok());
}
