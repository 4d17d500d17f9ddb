use labelize::{Identifier, label_one_of_many};

mod staff {
    use labelize::{Identifier, LabelTarget};

    pub struct Person {
        pub code: String,
    }

    impl LabelTarget for Person {
        fn primary_key(&self) -> Identifier {
            Identifier::from(self.code.clone())
        }
    }
}

#[derive(Default)]
struct Project {
    owner_id: Option<Identifier>,
}

impl Project {
    label_one_of_many!(staff::people, as = owner);
}

fn main() {
    let mut project = Project::default();
    project.set_owner(&staff::Person {
        code: "p-1".to_owned(),
    });

    assert_eq!(project.owner_id, Some(Identifier::from("p-1")));
    assert_eq!(Project::OWNER_LABEL.target(), "staff::Person");
}
