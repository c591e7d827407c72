fn main() {
    synacor::term::main()
}
