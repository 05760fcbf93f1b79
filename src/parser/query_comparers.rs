use crate::parser::WordComparer;

/// The keyword table shared by every clause parser. Built once per cursor.
#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub distinct: WordComparer,
    pub alias: WordComparer,
    pub from: WordComparer,
    pub join: WordComparer,
    pub inner_join: WordComparer,
    pub left_join: WordComparer,
    pub left_outer_join: WordComparer,
    pub right_join: WordComparer,
    pub right_outer_join: WordComparer,
    pub full_join: WordComparer,
    pub full_outer_join: WordComparer,
    pub on: WordComparer,
    pub r#where: WordComparer,
    pub group_by: WordComparer,
    pub having: WordComparer,
    pub order_by: WordComparer,
    pub limit: WordComparer,
    pub offset: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub not: WordComparer,
    pub between: WordComparer,
    pub not_between: WordComparer,
    pub like: WordComparer,
    pub not_like: WordComparer,
    pub is_null: WordComparer,
    pub is_not_null: WordComparer,
    pub r#in: WordComparer,
    pub not_in: WordComparer,
    pub asc: WordComparer,
    pub desc: WordComparer,
    pub b_true: WordComparer,
    pub b_false: WordComparer,
    pub null: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT"),
            distinct: WordComparer::new("DISTINCT"),
            alias: WordComparer::new("AS"),
            from: WordComparer::new("FROM"),
            join: WordComparer::new("JOIN"),
            inner_join: WordComparer::new("INNER JOIN"),
            left_join: WordComparer::new("LEFT JOIN"),
            left_outer_join: WordComparer::new("LEFT OUTER JOIN"),
            right_join: WordComparer::new("RIGHT JOIN"),
            right_outer_join: WordComparer::new("RIGHT OUTER JOIN"),
            full_join: WordComparer::new("FULL JOIN"),
            full_outer_join: WordComparer::new("FULL OUTER JOIN"),
            on: WordComparer::new("ON"),
            r#where: WordComparer::new("WHERE"),
            group_by: WordComparer::new("GROUP BY"),
            having: WordComparer::new("HAVING"),
            order_by: WordComparer::new("ORDER BY"),
            limit: WordComparer::new("LIMIT"),
            offset: WordComparer::new("OFFSET"),
            and: WordComparer::new("AND"),
            or: WordComparer::new("OR"),
            not: WordComparer::new("NOT"),
            between: WordComparer::new("BETWEEN"),
            not_between: WordComparer::new("NOT BETWEEN"),
            like: WordComparer::new("LIKE"),
            not_like: WordComparer::new("NOT LIKE"),
            is_null: WordComparer::new("IS NULL"),
            is_not_null: WordComparer::new("IS NOT NULL"),
            r#in: WordComparer::new("IN"),
            not_in: WordComparer::new("NOT IN"),
            asc: WordComparer::new("ASC"),
            desc: WordComparer::new("DESC"),
            b_true: WordComparer::new("TRUE"),
            b_false: WordComparer::new("FALSE"),
            null: WordComparer::new("NULL"),
        }
    }
}
