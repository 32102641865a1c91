fn main() {
    grapher::term::main();
}
