use warden_trie::Trie;

fn main() {
    let mut trie = Trie::new();
    trie.insert("/api/v1/users", &[7, 42], "users")
        .insert("/files/{path}", &[0], "files")
        .insert("/u/{name}-{tag}/profile", &[0], "profile");

    print!("{}", trie.dump());

    let queries = [
        ("/API/v1/users", 42u32),
        ("/api/v1/users", 9),
        ("/files/README", 0),
        ("/u/alice-admin/profile", 1),
    ];

    for (path, user) in queries {
        let hit = trie.lookup(path, user);
        println!(
            "{} user={} exists={} allowed={} bindings={:?}",
            path,
            user,
            hit.exists(),
            hit.allowed(),
            hit.bindings()
        );
    }
}
