fn main() {
    if let Err(err) = banksoal::template::run(std::env::args_os()) {
        eprintln!("Gagal membuat template bank soal: {err:#}");
        std::process::exit(1);
    }
}
