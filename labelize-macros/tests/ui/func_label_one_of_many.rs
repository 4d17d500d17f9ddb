use labelize::{Identifier, LabelTarget, label_one_of_many};

struct Employee {
    id: i64,
}

impl LabelTarget for Employee {
    fn primary_key(&self) -> Identifier {
        Identifier::from(self.id)
    }
}

#[derive(Default)]
struct Company {
    president_id: Option<Identifier>,
    manager_id: Option<Identifier>,
    janitor_id: Option<Identifier>,
    employee_id: Option<Identifier>,
}

impl Company {
    label_one_of_many!(employees, as = [president, "manager"]);
    label_one_of_many!(employees, as = janitor,);
    label_one_of_many!(employees);
}

fn main() {
    let mut company = Company::default();
    company.set_president(&Employee { id: 1 });
    company.set_manager(2);
    company.set_janitor("3");
    company.set_employee(String::from("4"));

    assert_eq!(company.president_id, Some(Identifier::Integer(1)));
    assert_eq!(company.manager_id, Some(Identifier::Integer(2)));
    assert_eq!(company.janitor_id, Some(Identifier::from("3")));
    assert_eq!(company.employee_id, Some(Identifier::from("4")));
    assert_eq!(Company::MANAGER_LABEL.column(), "manager_id");
}
