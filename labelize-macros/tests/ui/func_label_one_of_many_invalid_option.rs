use labelize::label_one_of_many;

struct Company;

impl Company {
    label_one_of_many!(employees, through = "payroll");
}

fn main() {
    let _ = Company;
}
