/// These fixtures carry raw DER bytes encoded as standard base64 (with `+`,
/// `/`, and `=` padding), not the base64url-without-padding alphabet that
/// `crate::util::b64_decode` enforces for JWS segments. Use this helper
/// (not `b64_decode`) to load them in tests.
pub fn decode_std_b64(input: &str) -> Vec<u8> {
    base64::decode_config(input, base64::STANDARD).expect("invalid standard-base64 fixture")
}

pub const RSA_PRIV_PKCS8_DER_B64: &str = "MIIEvwIBADANBgkqhkiG9w0BAQEFAASCBKkwggSlAgEAAoIBAQDHnMX2sFnBYOxQi2j10io980JzOe9mlG3t2fzydzL9Un7oC377/n02nhhY+L/dUjRfGuRcbFFkhfeUPUAgJ4t7zj+YnrXHba8hFifiBeVgi/u9SR9CsFRPnIER+kJPxQRk2mBvSBkDxuKBuqN5W+Epjq4R5K1+EQED28zOe9UgiFZCmjF1qkEyyTs96tlgi6umf0YpWXz01F4Uztiz+Ej7FBLKg6/lQASWaXy5FJKQTKC5g19Hu7VQJe6sAnzcL38OGGn3YAILt+Nwg2qeD139MrmUH0/SxhWXX5wCAtSo94wGpozJuCsw6I0U9JNicCQnuhL3UIVbS6D/c44gFaJ3AgMBAAECggEAH3gbzZRn0hDRsLEJzxdfCX08UKYlk+p6mjDvq9oW89D5qOOHFXs9ikrKU9yDgwTetM+siNWaz1o/eeNeJLOXTeFqLUl4JwSnw3OWvg9n5hyrh1/rybu6zwJBZvApXCIXWz8CTQj0yJ+mPgWKmCtgCAkycCe5IlLT8iPI2hSzuPj+I0qI5t44wINFppRkj+Tffpp7TUnZnrGkk6i7rovbeehAAqjRujQUpAK2hBh3TrGkFmuR4YyAIar2VzDy1G00DocuI2eV7vLR8SVnldMK5d2fMEcHiMgs98EIeXbY19Ota4QHBalCO+fN7DP9nrcyBp7UleoSYi8uhZSHn86EwQKBgQDtgBdWIAMq2eGHF444IDodTHITRJPlCRNiCAabAkTzotskOsRPeUOikoJeKpEhtkCsJP+cdBb2UC1bG1qtseMMPDYz1Gssg+iXOyZqDHi/HADtNOvexCtnzUtqc5sPkdbiP+pCDIwRqDOj5b1jbpLQspfi0QXlt6Eec/9uA24nmQKBgQDXKSwIMkrTYW2MEE8SuX53xIudio25ApE7WUMnNtDqwhQD/wbslkLHgE0jvWrgXu3bNOHoXI3PZfopdueV8eeLAl37mQ1hT7Hwbw+tu3JUIOi6fC9h/z/Z5RYSLP9ZsD0tBHHlmvj2ON97ka7d0qSEkibETMd+h8cJNzvmhVwkjwKBgQCTpilb4qT1c+TQXmWNIQPgCRF2RxEGt4C0Vjb9EQkayikgueQnYEUbAahIsH/vjGViX9IFSuqnkKrR1AyopUl45snvqOREFXF4603zafN7JAazcU4d/KjbbHaxJFPG9yy3FXMmQrSlmYMZJo96DFj7o7vnR3k6GdHxo72tgDZwKQKBgQCjKfrVQGZUBGdRtzBvz7FjW+5QizjMW3ENY7S0MTKfRIxvN1/l3FFJ/zcAam15NyQDfwft8PotlHTwKtaWdDsVxLbGzJtD927GGUL3idW6jLZQbUp1c17Ve4+QOwVt22OZFuzUpQA1oI2BpMnKOCpAyqCRbnQ+tPKwP22yc+GbawKBgQChbnNTmjLTPOsIGz4iYJQAu4muh89RQ5LzkNyj/gERgB+xx+LTcVHLVLJtvaHvKHfLz0RmbgmQBDZpS5kOVowVP67QdlbLEhfGd0v8BUEVF139sRiQjYu8iMlqbjsyHyDN2GwsYIgs5NRdAoG/QxqmBwD1lUq3sIqMapwXKJLT/Q==";
pub const RSA_PUB_PKCS1_DER_B64: &str = "MIIBCgKCAQEAx5zF9rBZwWDsUIto9dIqPfNCcznvZpRt7dn88ncy/VJ+6At++/59Np4YWPi/3VI0XxrkXGxRZIX3lD1AICeLe84/mJ61x22vIRYn4gXlYIv7vUkfQrBUT5yBEfpCT8UEZNpgb0gZA8bigbqjeVvhKY6uEeStfhEBA9vMznvVIIhWQpoxdapBMsk7PerZYIurpn9GKVl89NReFM7Ys/hI+xQSyoOv5UAElml8uRSSkEyguYNfR7u1UCXurAJ83C9/Dhhp92ACC7fjcINqng9d/TK5lB9P0sYVl1+cAgLUqPeMBqaMybgrMOiNFPSTYnAkJ7oS91CFW0ug/3OOIBWidwIDAQAB";
pub const EC256_PRIV_PKCS8_DER_B64: &str = "MIGHAgEAMBMGByqGSM49AgEGCCqGSM49AwEHBG0wawIBAQQgyYkRytaX4/SUEURALke2Nbw8DvRcHcXqDAgCAkLeriihRANCAAQJdIzZ26TzwQVYBxFoEQFtyhN7UC4LMWoreyRY0k1aD4NJHBwIUCUcLsDT73VV88GHA9K5Mqfqp0aweX7Sj636";
pub const EC256_PUB_SPKI_DER_B64: &str = "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAECXSM2duk88EFWAcRaBEBbcoTe1AuCzFqK3skWNJNWg+DSRwcCFAlHC7A0+91VfPBhwPSuTKn6qdGsHl+0o+t+g==";
pub const EC384_PRIV_PKCS8_DER_B64: &str = "MIG2AgEAMBAGByqGSM49AgEGBSuBBAAiBIGeMIGbAgEBBDBsRNX+SFelS8fJ1ATqu8alLtccrRgF2N39jg+6FYFQn7uxu8n5HKHfCGBZRRwdxzihZANiAAQhMv4whAHIUBBAL2nSyWulOY8eEadffMbXdAdih64Y4dDo4kQGKt6ZGjLSbMm1Zbv2KtwxsdP4XbOgfU6+QLXyl0qAkB7vQ0fjhIQ6nD4m4/Gn0N+6ldYBj5RYbAElUxI=";
pub const EC384_PUB_SPKI_DER_B64: &str = "MHYwEAYHKoZIzj0CAQYFK4EEACIDYgAEITL+MIQByFAQQC9p0slrpTmPHhGnX3zG13QHYoeuGOHQ6OJEBiremRoy0mzJtWW79ircMbHT+F2zoH1OvkC18pdKgJAe70NH44SEOpw+JuPxp9DfupXWAY+UWGwBJVMS";
pub const EC521_PRIV_PKCS8_DER_B64: &str = "MIHuAgEAMBAGByqGSM49AgEGBSuBBAAjBIHWMIHTAgEBBEIBUtUu25BzxHZYDnT1z+6XhPu2sBjp74SBNJakH6EHgOtA2OUbWjXEBXUI5YNrqs+O/D6KmvZ+F8jbIMnHiKbYTmGhgYkDgYYABABYsU2hrn5qh46kRldl14B2sKfbJL8ndfaMrVlsihCh9vxCLWpZEvHqfkgxrsqxtMSPn1ez831qijgGmebDHOcnJgDrnqbZ2km3h/Re9zV33PYXa8iZPjdoIXEtSwpTbZ1unrnjlUZzw9NxJzoIO08LAo6LaMq+3EbnvnfvUOmQ2pXwag==";
pub const EC521_PUB_SPKI_DER_B64: &str = "MIGbMBAGByqGSM49AgEGBSuBBAAjA4GGAAQAWLFNoa5+aoeOpEZXZdeAdrCn2yS/J3X2jK1ZbIoQofb8Qi1qWRLx6n5IMa7KsbTEj59Xs/N9aoo4BpnmwxznJyYA656m2dpJt4f0Xvc1d9z2F2vImT43aCFxLUsKU22dbp6545VGc8PTcSc6CDtPCwKOi2jKvtxG575371DpkNqV8Go=";
