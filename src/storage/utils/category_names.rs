pub struct CategoryNames;

const RECORDS_TREE_POSTFIX: &str = "records";

const DELIMITER: &str = "_";

impl CategoryNames {
    pub fn records(category: &str) -> String {
        format!("{category}{DELIMITER}{RECORDS_TREE_POSTFIX}")
    }
}
