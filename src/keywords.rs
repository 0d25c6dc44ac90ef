use crate::script::Keyword;
use easy_ext::ext;

#[ext(KeywordExt)]
impl Keyword {
    pub fn to_str(self) -> &'static str {
        match self {
            Keyword::Add => "add",
            Keyword::Contains => "contains",
            Keyword::Find => "find",
            Keyword::Union => "union",
            Keyword::Same => "same",
            Keyword::Classes => "classes",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Keyword::Classes => 0,
            Keyword::Add | Keyword::Contains | Keyword::Find => 1,
            Keyword::Union | Keyword::Same => 2,
        }
    }
}
