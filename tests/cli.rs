use assert_cmd::Command;

#[test]
fn evaluates_the_expression_and_prints_the_result() {
    Command::cargo_bin("infixcalc").unwrap()
                                   .arg("1 + 2 * 3")
                                   .assert()
                                   .success()
                                   .stdout("7\n");
}

#[test]
fn prints_the_double_precision_representation() {
    Command::cargo_bin("infixcalc").unwrap()
                                   .arg("1/3")
                                   .assert()
                                   .success()
                                   .stdout("0.3333333333333333\n");
}

#[test]
fn division_by_zero_prints_infinity() {
    Command::cargo_bin("infixcalc").unwrap()
                                   .arg("1/0")
                                   .assert()
                                   .success()
                                   .stdout("inf\n");
}

#[test]
fn malformed_expression_fails_with_a_message() {
    Command::cargo_bin("infixcalc").unwrap()
                                   .arg("1 +")
                                   .assert()
                                   .failure()
                                   .stderr("Missing operand for operator '+'.\n");
}

#[test]
fn missing_argument_is_a_usage_error() {
    Command::cargo_bin("infixcalc").unwrap().assert().failure();
}

#[test]
fn extra_arguments_are_a_usage_error() {
    Command::cargo_bin("infixcalc").unwrap()
                                   .args(["1 + 2", "3"])
                                   .assert()
                                   .failure();
}
