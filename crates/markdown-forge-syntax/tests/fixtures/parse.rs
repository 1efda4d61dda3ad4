#[derive(Debug, Clone)]
pub struct Token<'a> {
    text: &'a str, /* borrowed
    from input */
}

fn main() {
    let c = '\n';
    let v: Vec<u8> = vec![1, 2, 3];
    println!("{:?} {}", v.iter().sum::<u8>(), c);
}
