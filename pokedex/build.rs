fn main() {
    slint_build::compile("ui/appwindow.slint").expect("compile ui/appwindow.slint failed");
}
