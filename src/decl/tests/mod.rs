mod tests_validation;
