//! First compilation unit of the scenario: `b/1`, `a/1`, `a/2`, in that file order.
use testcase_registry::test_case;

pub const B1_LINE: u32 = line!() + 1;
#[test_case("b/1")]
fn b_1() {}

pub const A1_LINE: u32 = line!() + 1;
#[test_case("a/1")]
fn a_1() -> anyhow::Result<()> {
    Ok(())
}

pub const A2_LINE: u32 = line!() + 1;
#[test_case("a/2")]
async fn a_2() -> Result<(), std::io::Error> {
    Ok(())
}

#[test]
fn declared_functions_stay_callable() {
    b_1();
    assert!(a_1().is_ok());
    assert!(futures::executor::block_on(a_2()).is_ok());
}
